//! Proleptic Gregorian calendar geometry for the month view.

use crate::errors::AppResult;
use crate::models::keys::{DayKey, MonthKey};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// First column of the week grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Column (0..=6) in which `weekday` falls.
    pub fn column_of(&self, weekday: Weekday) -> u32 {
        match self {
            WeekStart::Sunday => weekday.num_days_from_sunday(),
            WeekStart::Monday => weekday.num_days_from_monday(),
        }
    }

    pub fn weekdays(&self) -> [Weekday; 7] {
        let first = match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        };
        let mut out = [first; 7];
        for i in 1..7 {
            out[i] = out[i - 1].succ();
        }
        out
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn month_length(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap_year(year) => 29,
        _ => 28,
    }
}

pub fn days_in_month(year: i32, month: u32) -> AppResult<u32> {
    let m = MonthKey::new(year, month)?;
    Ok(month_length(m.year(), m.month()))
}

/// Day of week of the 1st, 0 = Sunday.
pub fn first_weekday_of_month(year: i32, month: u32) -> AppResult<u32> {
    first_weekday_of_month_from(year, month, WeekStart::Sunday)
}

/// Column of the 1st in a grid whose weeks begin on `start`.
pub fn first_weekday_of_month_from(year: i32, month: u32, start: WeekStart) -> AppResult<u32> {
    let m = MonthKey::new(year, month)?;
    Ok(start.column_of(m.first_day().date().weekday()))
}

pub fn weekday_of(key: &DayKey) -> Weekday {
    key.date().weekday()
}

/// Cells of a month grid: leading blanks, then one key per day.
pub fn month_grid(month: &MonthKey, start: WeekStart) -> Vec<Option<DayKey>> {
    let lead = start.column_of(month.first_day().date().weekday()) as usize;
    let days = month_length(month.year(), month.month());

    let mut cells: Vec<Option<DayKey>> = vec![None; lead];
    cells.extend(
        (1..=days)
            .filter_map(|d| NaiveDate::from_ymd_opt(month.year(), month.month(), d))
            .filter_map(|date| DayKey::from_date(date).ok())
            .map(Some),
    );
    cells
}
