//! Conversion of user-typed durations into minutes.
//!
//! This is the only place where text becomes numbers: the ledger itself
//! only ever sees non-negative minute counts.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

static HH_MM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+):([0-5]?\d)$").expect("valid regex"));

static H_M: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+(?:\.\d+)?)\s*h)?\s*(?:(\d+)\s*m(?:in)?)?$").expect("valid regex")
});

/// Parse a duration typed by the user into minutes.
///
/// Accepted forms: `90`, `1:30`, `1h30m`, `1h`, `45m`, `1.5h`, and the
/// empty string (zero). A leading `-` is accepted and clamps to zero.
pub fn parse_minutes(raw: &str) -> AppResult<u32> {
    let s = raw.trim().to_ascii_lowercase();
    let invalid = || AppError::InvalidDuration(raw.to_string());

    if s.is_empty() {
        return Ok(0);
    }

    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, s.as_str()),
    };
    if body.is_empty() {
        return Err(invalid());
    }

    let minutes: u64 = if body.bytes().all(|b| b.is_ascii_digit()) {
        body.parse().map_err(|_| invalid())?
    } else if let Some(c) = HH_MM.captures(body) {
        let h: u64 = c[1].parse().map_err(|_| invalid())?;
        let m: u64 = c[2].parse().map_err(|_| invalid())?;
        h.saturating_mul(60).saturating_add(m)
    } else if let Some(c) = H_M.captures(body) {
        let hours = c.get(1);
        let mins = c.get(2);
        if hours.is_none() && mins.is_none() {
            return Err(invalid());
        }

        let h: f64 = match hours {
            Some(h) => h.as_str().parse().map_err(|_| invalid())?,
            None => 0.0,
        };
        let m: u64 = match mins {
            Some(m) => m.as_str().parse().map_err(|_| invalid())?,
            None => 0,
        };
        ((h * 60.0).round() as u64).saturating_add(m)
    } else {
        return Err(invalid());
    };

    if negative {
        return Ok(0);
    }
    u32::try_from(minutes).map_err(|_| invalid())
}

/// Combine an hours field and a minutes field, clamping each at zero.
pub fn from_hours_minutes(hours: i64, minutes: i64) -> u32 {
    let total = hours
        .max(0)
        .saturating_mul(60)
        .saturating_add(minutes.max(0));
    u32::try_from(total).unwrap_or(u32::MAX)
}
