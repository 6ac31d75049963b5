//! Calendar keys used by the ledger.
//!
//! A `DayKey` renders as `YYYY-MM-DD`, a `MonthKey` as `YYYY-MM` and a
//! `YearKey` as `YYYY-`. Month and year keys are string prefixes of every
//! day key they contain, and range filtering over the ledger relies on
//! that: all parts are always zero-padded.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Years outside this range would not render as four digits.
pub const MIN_YEAR: i32 = 0;
pub const MAX_YEAR: i32 = 9999;

fn check_year(year: i32) -> AppResult<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(AppError::InvalidMonth(format!(
            "year {year} is outside {MIN_YEAR:04}..={MAX_YEAR:04}"
        )))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn from_date(date: NaiveDate) -> AppResult<Self> {
        check_year(date.year()).map_err(|_| AppError::InvalidDate(date.to_string()))?;
        Ok(Self(date))
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> AppResult<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| AppError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))?;
        Self::from_date(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month_key(&self) -> MonthKey {
        MonthKey {
            year: self.year(),
            month: self.month(),
        }
    }

    pub fn year_key(&self) -> YearKey {
        YearKey(self.year())
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for DayKey {
    type Err = AppError;

    /// Only the canonical zero-padded form is accepted: `2025-3-5` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let b = s.as_bytes();
        if b.len() != 10 || b[4] != b'-' || b[7] != b'-' {
            return Err(AppError::InvalidDate(s.to_string()));
        }

        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(s.to_string()))?;
        let key = Self::from_date(date)?;

        if key.to_string() != s {
            return Err(AppError::InvalidDate(s.to_string()));
        }
        Ok(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        check_year(year)?;
        if !(1..=12).contains(&month) {
            return Err(AppError::InvalidMonth(format!("month {month} is outside 1..=12")));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year_key(&self) -> YearKey {
        YearKey(self.year)
    }

    /// Prefix shared by every `DayKey` of this month.
    pub fn prefix(&self) -> String {
        self.to_string()
    }

    pub fn first_day(&self) -> DayKey {
        DayKey(NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default())
    }

    /// Following month, wrapping December into January of the next year.
    /// Saturates at the last representable month.
    pub fn succ(&self) -> Self {
        match (self.year, self.month) {
            (MAX_YEAR, 12) => *self,
            (y, 12) => Self { year: y + 1, month: 1 },
            (y, m) => Self { year: y, month: m + 1 },
        }
    }

    /// Preceding month, wrapping January into December of the previous year.
    pub fn pred(&self) -> Self {
        match (self.year, self.month) {
            (MIN_YEAR, 1) => *self,
            (y, 1) => Self { year: y - 1, month: 12 },
            (y, m) => Self { year: y, month: m - 1 },
        }
    }

    /// Move `n` months forward (positive) or backward (negative),
    /// saturating at the first and last representable months.
    pub fn shift(&self, n: i32) -> Self {
        let first = i64::from(MIN_YEAR) * 12;
        let last = i64::from(MAX_YEAR) * 12 + 11;
        let index = (i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(n))
            .clamp(first, last);

        Self {
            year: (index / 12) as i32,
            month: (index % 12) as u32 + 1,
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidMonth(s.to_string());

        let (y, m) = s.split_once('-').ok_or_else(invalid)?;
        let digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
        if y.len() != 4 || m.len() != 2 || !digits(y) || !digits(m) {
            return Err(invalid());
        }
        let year: i32 = y.parse().map_err(|_| invalid())?;
        let month: u32 = m.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearKey(i32);

impl YearKey {
    pub fn new(year: i32) -> AppResult<Self> {
        check_year(year)?;
        Ok(Self(year))
    }

    pub fn year(&self) -> i32 {
        self.0
    }

    pub fn prefix(&self) -> String {
        self.to_string()
    }

    pub fn months(&self) -> impl Iterator<Item = MonthKey> + use<> {
        let year = self.0;
        (1..=12).map(move |month| MonthKey { year, month })
    }
}

impl fmt::Display for YearKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-", self.0)
    }
}
