//! ANSI color helper utilities for terminal output.
use chrono::Weekday;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const ORANGE: &str = "\x1b[38;5;208m";

/// Color of a day number in the month grid:
/// Sunday, holidays and paid leave → red, Saturday → blue.
pub fn color_for_day(weekday: Weekday, paid_leave: bool, holiday: bool) -> &'static str {
    if weekday == Weekday::Sun || paid_leave || holiday {
        RED
    } else if weekday == Weekday::Sat {
        BLUE
    } else {
        RESET
    }
}

/// Wrap `value` in `color`, greying it out instead when `count` is zero.
pub fn colorize_count(value: &str, count: u32, color: &str) -> String {
    if count == 0 {
        format!("{GREY}{value}{RESET}")
    } else {
        format!("{color}{value}{RESET}")
    }
}
