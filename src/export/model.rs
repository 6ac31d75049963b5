// src/export/model.rs

use crate::models::keys::DayKey;
use crate::models::record::Record;
use crate::utils::hm;
use serde::Serialize;

/// Flat row for export: one per recorded day.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RecordExport {
    pub date: String,
    pub overtime_minutes: u32,
    pub overtime: String,
    pub holiday_work_minutes: u32,
    pub holiday_work: String,
    pub paid_leave: bool,
}

impl RecordExport {
    pub fn from_entry(key: &DayKey, record: &Record) -> Self {
        Self {
            date: key.to_string(),
            overtime_minutes: record.overtime_minutes,
            overtime: hm(record.overtime_minutes),
            holiday_work_minutes: record.holiday_work_minutes,
            holiday_work: hm(record.holiday_work_minutes),
            paid_leave: record.paid_leave,
        }
    }
}
