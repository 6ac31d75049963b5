use crate::utils::colors::{BLUE, BOLD, GREEN, GREY, RED, RESET, YELLOW};
use std::fmt;

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", RED, BOLD, ICON_ERR, RESET, msg);
}

/// Secondary line, printed dimmed.
pub fn note<T: fmt::Display>(msg: T) {
    println!("{}{}{}", GREY, msg, RESET);
}

/// Section header, underlined with `sep` up to the title width.
pub fn header<T: fmt::Display>(msg: T, sep: &str) {
    let title = msg.to_string();
    let width = crate::utils::formatting::display_width(&title);
    println!("{}{}{}{}", BLUE, BOLD, title, RESET);
    println!("{}", sep.repeat(width.max(1)));
}
