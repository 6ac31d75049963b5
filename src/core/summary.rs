use crate::core::calendar_view::summary_line;
use crate::core::ledger::Ledger;
use crate::errors::AppResult;
use crate::models::keys::MonthKey;
use crate::models::summary::{PaidLeaveScope, YearlySummary};
use crate::ui::messages::{header, note};
use crate::utils::date::month_name;
use crate::utils::formatting::plural_days;
use crate::utils::table::{Column, Table};
use crate::utils::{hm, mins2readable};

pub struct SummaryLogic;

impl SummaryLogic {
    pub fn print_month(ledger: &Ledger, month: &MonthKey, scope: PaidLeaveScope, sep: &str) {
        let s = ledger.summarize_month(month);

        header(
            format!("Summary for {} {}", month_name(month.month()), month.year()),
            sep,
        );
        println!("{}", summary_line(ledger, month, scope));
        println!();
        println!("  Overtime:          {}", mins2readable(s.total_overtime_minutes, false));
        println!("  Holiday work days: {}", plural_days(s.holiday_work_day_count));
        println!(
            "  Holiday work time: {}",
            mins2readable(s.total_holiday_work_minutes, false)
        );
        println!(
            "  Paid leave:        {} this month, {} in {}",
            plural_days(s.paid_leave_day_count),
            plural_days(ledger.count_paid_leave_in_year(&month.year_key())),
            month.year()
        );
    }

    pub fn print_year(ledger: &Ledger, year: i32, sep: &str) -> AppResult<()> {
        let summary = ledger.aggregate_year(year)?;
        header(format!("Summary for {}", year), sep);
        print!("{}", Self::year_table(&summary, sep).render());

        if summary.total_overtime_minutes == 0
            && summary.total_holiday_work_minutes == 0
            && summary.paid_leave_day_count == 0
        {
            note(format!("Nothing recorded in {}.", year));
        }
        Ok(())
    }

    pub fn year_table(summary: &YearlySummary, sep: &str) -> Table {
        let mut table = Table::new(
            vec![
                Column::left("Month", 10),
                Column::right("Overtime", 10),
                Column::right("HW days", 8),
                Column::right("HW time", 10),
                Column::right("Paid leave", 10),
            ],
            sep,
        );

        for (m, s) in &summary.months {
            table.add_row(vec![
                month_name(m.month()).to_string(),
                hm(s.total_overtime_minutes),
                s.holiday_work_day_count.to_string(),
                hm(s.total_holiday_work_minutes),
                s.paid_leave_day_count.to_string(),
            ]);
        }

        table.add_row(vec![
            "Total".to_string(),
            hm(summary.total_overtime_minutes),
            summary.holiday_work_day_count.to_string(),
            hm(summary.total_holiday_work_minutes),
            summary.paid_leave_day_count.to_string(),
        ]);

        table
    }
}
