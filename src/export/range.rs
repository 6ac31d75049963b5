// src/export/range.rs

use crate::core::calendar::days_in_month;
use crate::errors::{AppError, AppResult};
use crate::models::keys::{DayKey, MonthKey};

/// Parse a `--range` value into inclusive day bounds.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(DayKey, DayKey)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidDate(format!(
                "start and end must have same format: {r}"
            )));
        }

        let (d1, _) = parse_single(start)?;
        let (_, d2) = parse_single(end)?;

        if d1 > d2 {
            return Err(AppError::InvalidDate(format!("range start after end: {r}")));
        }
        Ok((d1, d2))
    } else {
        parse_single(r.trim())
    }
}

fn parse_single(p: &str) -> AppResult<(DayKey, DayKey)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p
                .parse()
                .map_err(|_| AppError::InvalidDate(format!("invalid year: {p}")))?;
            Ok((DayKey::from_ymd(y, 1, 1)?, DayKey::from_ymd(y, 12, 31)?))
        }
        // YYYY-MM
        7 => {
            let m: MonthKey = p.parse()?;
            let last = days_in_month(m.year(), m.month())?;
            Ok((
                m.first_day(),
                DayKey::from_ymd(m.year(), m.month(), last)?,
            ))
        }
        // YYYY-MM-DD
        10 => {
            let d: DayKey = p.parse()?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidDate(format!(
            "unsupported --range format: {p}"
        ))),
    }
}
