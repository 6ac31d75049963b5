//! Monthly and yearly aggregation over the ledger.

use crate::core::ledger::Ledger;
use crate::errors::AppResult;
use crate::models::keys::{MonthKey, YearKey};
use crate::models::record::Record;
use crate::models::summary::{MonthlySummary, PaidLeaveScope, YearlySummary};

/// Split a minute total into whole hours and remaining minutes.
pub fn minutes_to_hours_and_minutes(total_minutes: u32) -> (u32, u32) {
    (total_minutes / 60, total_minutes % 60)
}

fn summarize<'a>(records: impl Iterator<Item = &'a Record>) -> MonthlySummary {
    records.fold(MonthlySummary::default(), |mut acc, r| {
        acc.total_overtime_minutes = acc
            .total_overtime_minutes
            .saturating_add(r.overtime_minutes);
        acc.total_holiday_work_minutes = acc
            .total_holiday_work_minutes
            .saturating_add(r.holiday_work_minutes);
        if r.has_holiday_work() {
            acc.holiday_work_day_count += 1;
        }
        if r.paid_leave {
            acc.paid_leave_day_count += 1;
        }
        acc
    })
}

impl Ledger {
    pub fn aggregate_month(&self, year: i32, month: u32) -> AppResult<MonthlySummary> {
        Ok(self.summarize_month(&MonthKey::new(year, month)?))
    }

    pub fn summarize_month(&self, month: &MonthKey) -> MonthlySummary {
        let prefix = month.prefix();
        summarize(self.entries_with_prefix(&prefix).map(|(_, r)| r))
    }

    pub fn aggregate_paid_leave_for_year(&self, year: i32) -> AppResult<u32> {
        Ok(self.count_paid_leave_in_year(&YearKey::new(year)?))
    }

    pub fn count_paid_leave_in_year(&self, year: &YearKey) -> u32 {
        let prefix = year.prefix();
        self.entries_with_prefix(&prefix)
            .filter(|(_, r)| r.paid_leave)
            .count() as u32
    }

    /// Paid-leave days shown next to a month, counted over `scope`.
    pub fn paid_leave_days(&self, month: &MonthKey, scope: PaidLeaveScope) -> u32 {
        match scope {
            PaidLeaveScope::Month => self.summarize_month(month).paid_leave_day_count,
            PaidLeaveScope::Year => self.count_paid_leave_in_year(&month.year_key()),
        }
    }

    pub fn aggregate_year(&self, year: i32) -> AppResult<YearlySummary> {
        let year_key = YearKey::new(year)?;
        let months: Vec<(MonthKey, MonthlySummary)> = year_key
            .months()
            .map(|m| (m, self.summarize_month(&m)))
            .collect();

        let totals = months.iter().fold(MonthlySummary::default(), |mut acc, (_, s)| {
            acc.total_overtime_minutes = acc
                .total_overtime_minutes
                .saturating_add(s.total_overtime_minutes);
            acc.holiday_work_day_count += s.holiday_work_day_count;
            acc.total_holiday_work_minutes = acc
                .total_holiday_work_minutes
                .saturating_add(s.total_holiday_work_minutes);
            acc.paid_leave_day_count += s.paid_leave_day_count;
            acc
        });

        Ok(YearlySummary {
            year,
            months,
            total_overtime_minutes: totals.total_overtime_minutes,
            holiday_work_day_count: totals.holiday_work_day_count,
            total_holiday_work_minutes: totals.total_holiday_work_minutes,
            paid_leave_day_count: totals.paid_leave_day_count,
        })
    }
}
