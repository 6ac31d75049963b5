use crate::errors::AppResult;
use crate::models::keys::{DayKey, MonthKey};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn today_key() -> AppResult<DayKey> {
    DayKey::from_date(today())
}

pub fn current_month() -> AppResult<MonthKey> {
    let t = today();
    MonthKey::new(t.year(), t.month())
}

/// Parse `YYYY-MM-DD`, or `today`.
pub fn parse_day_key(s: &str) -> AppResult<DayKey> {
    if s.eq_ignore_ascii_case("today") {
        return today_key();
    }
    s.parse()
}

/// Parse `YYYY-MM`; `None` means the current month.
pub fn parse_month_or_current(s: Option<&str>) -> AppResult<MonthKey> {
    match s {
        Some(m) => m.parse(),
        None => current_month(),
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

pub fn weekday_short(w: chrono::Weekday) -> &'static str {
    match w {
        chrono::Weekday::Mon => "Mon",
        chrono::Weekday::Tue => "Tue",
        chrono::Weekday::Wed => "Wed",
        chrono::Weekday::Thu => "Thu",
        chrono::Weekday::Fri => "Fri",
        chrono::Weekday::Sat => "Sat",
        chrono::Weekday::Sun => "Sun",
    }
}
