use crate::cli::commands::open_book;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::input::{from_hours_minutes, parse_minutes};
use crate::core::set::{RecordPatch, SetLogic};
use crate::errors::AppResult;
use crate::utils::date;

/// A duration given either as text (`--ot 1:30`) or as separate
/// hour and minute fields (`--ot-h 1 --ot-m 30`).
fn minutes_arg(
    text: &Option<String>,
    hours: &Option<i64>,
    minutes: &Option<i64>,
) -> AppResult<Option<u32>> {
    match (text, hours, minutes) {
        (Some(raw), _, _) => parse_minutes(raw).map(Some),
        (None, None, None) => Ok(None),
        (None, h, m) => Ok(Some(from_hours_minutes(h.unwrap_or(0), m.unwrap_or(0)))),
    }
}

/// Record overtime, holiday work or paid leave for one day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        date: date_str,
        overtime,
        ot_hours,
        ot_minutes,
        holiday_work,
        hw_hours,
        hw_minutes,
        paid_leave,
        no_paid_leave,
    } = cmd
    {
        //
        // 1. Parse inputs before touching the database
        //
        let key = date::parse_day_key(date_str)?;

        let patch = RecordPatch {
            overtime_minutes: minutes_arg(overtime, ot_hours, ot_minutes)?,
            holiday_work_minutes: minutes_arg(holiday_work, hw_hours, hw_minutes)?,
            paid_leave: if *paid_leave {
                Some(true)
            } else if *no_paid_leave {
                Some(false)
            } else {
                None
            },
        };

        //
        // 2. Load, apply, persist
        //
        let mut book = open_book(cfg)?;
        SetLogic::apply(&mut book, key, patch)?;
    }

    Ok(())
}
