//! Formatting utilities used for CLI and export outputs.

use crate::core::aggregate::minutes_to_hours_and_minutes;
use unicode_width::UnicodeWidthStr;

/// Terminal columns taken by `s` (no ANSI sequences expected).
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", " ".repeat(fill), s)
}

pub fn center(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    let left = fill / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(fill - left))
}

/// Compact form used in calendar cells: `2h5m`, `0h45m`.
pub fn hm(mins: u32) -> String {
    let (h, m) = minutes_to_hours_and_minutes(mins);
    format!("{}h{}m", h, m)
}

pub fn mins2readable(mins: u32, short: bool) -> String {
    let (hours, minutes) = minutes_to_hours_and_minutes(mins);

    if short {
        // e.g. 02:25
        format!("{:02}:{:02}", hours, minutes)
    } else {
        // e.g. 02h 25m
        format!("{:02}h {:02}m", hours, minutes)
    }
}

pub fn plural_days(n: u32) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", n)
    }
}
