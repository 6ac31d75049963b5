use crate::models::keys::MonthKey;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which period the displayed paid-leave count covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PaidLeaveScope {
    #[default]
    Month,
    Year,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    pub total_overtime_minutes: u32,
    pub holiday_work_day_count: u32,
    pub total_holiday_work_minutes: u32,
    pub paid_leave_day_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearlySummary {
    pub year: i32,
    /// One entry per month, January first, including empty months.
    pub months: Vec<(MonthKey, MonthlySummary)>,
    pub total_overtime_minutes: u32,
    pub holiday_work_day_count: u32,
    pub total_holiday_work_minutes: u32,
    pub paid_leave_day_count: u32,
}
