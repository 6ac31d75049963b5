//! Terminal rendering of one month: the grid of days and the summary line.

use crate::core::calendar::{WeekStart, month_grid, weekday_of};
use crate::core::holidays::holiday_name;
use crate::core::ledger::Ledger;
use crate::models::keys::{DayKey, MonthKey};
use crate::models::summary::PaidLeaveScope;
use crate::utils::colors::{
    BLUE, CYAN, GREY, ORANGE, RED, RESET, YELLOW, color_for_day, colorize_count,
};
use crate::utils::date::{month_name, weekday_short};
use crate::utils::formatting::{center, pad_right, plural_days};
use crate::utils::hm;
use chrono::Weekday;

const CELL: usize = 8;

pub struct CalendarView<'a> {
    pub ledger: &'a Ledger,
    pub month: MonthKey,
    pub week_start: WeekStart,
    pub paid_leave_scope: PaidLeaveScope,
    pub show_holidays: bool,
}

impl CalendarView<'_> {
    pub fn title(&self) -> String {
        format!("{} {}", month_name(self.month.month()), self.month.year())
    }

    pub fn render(&self) -> String {
        let width = CELL * 7 + 6;
        let mut out = String::new();

        out.push_str(&center(&self.title(), width));
        out.push('\n');
        out.push_str(&summary_line(self.ledger, &self.month, self.paid_leave_scope));
        out.push_str("\n\n");

        let labels: Vec<String> = self
            .week_start
            .weekdays()
            .iter()
            .map(|w| {
                let label = pad_right(weekday_short(*w), CELL);
                match w {
                    Weekday::Sun => format!("{RED}{label}{RESET}"),
                    Weekday::Sat => format!("{BLUE}{label}{RESET}"),
                    _ => label,
                }
            })
            .collect();
        out.push_str(labels.join(" ").trim_end());
        out.push('\n');

        let cells = month_grid(&self.month, self.week_start);
        for week in cells.chunks(7) {
            let mut lines = [Vec::new(), Vec::new(), Vec::new()];
            for cell in week {
                let [day, ot, marks] = self.render_cell(cell.as_ref());
                lines[0].push(day);
                lines[1].push(ot);
                lines[2].push(marks);
            }
            for line in lines {
                out.push_str(line.join(" ").trim_end());
                out.push('\n');
            }
        }

        if self.show_holidays {
            let holidays: Vec<(DayKey, &str)> = cells
                .iter()
                .flatten()
                .filter_map(|k| holiday_name(k).map(|n| (*k, n)))
                .collect();
            if !holidays.is_empty() {
                out.push('\n');
                for (k, name) in holidays {
                    out.push_str(&format!("{GREY}* {} {}{RESET}\n", k, name));
                }
            }
        }

        out
    }

    /// Three text lines for one cell: day number, overtime, markers.
    fn render_cell(&self, key: Option<&DayKey>) -> [String; 3] {
        let blank = || " ".repeat(CELL);
        let Some(key) = key else {
            return [blank(), blank(), blank()];
        };

        let record = self.ledger.get(key);
        let paid_leave = record.is_some_and(|r| r.paid_leave);
        let holiday = self.show_holidays && holiday_name(key).is_some();

        let mut day = key.day().to_string();
        if holiday {
            day.push('*');
        }
        let color = color_for_day(weekday_of(key), paid_leave, holiday);
        let day = format!("{color}{}{RESET}", pad_right(&day, CELL));

        let ot = match record {
            Some(r) if r.has_overtime() => {
                format!("{ORANGE}{}{RESET}", pad_right(&hm(r.overtime_minutes), CELL))
            }
            _ => blank(),
        };

        let mut marks = Vec::new();
        if record.is_some_and(|r| r.has_holiday_work()) {
            marks.push(format!("{YELLOW}HW{RESET}"));
        }
        if paid_leave {
            marks.push(format!("{RED}PL{RESET}"));
        }
        // two letters per marker, one space between markers
        let shown = (marks.len() * 3).saturating_sub(1);
        let marks = format!("{}{}", marks.join(" "), " ".repeat(CELL.saturating_sub(shown)));

        [day, ot, marks]
    }
}

/// One-line monthly summary: overtime, holiday work, paid leave.
pub fn summary_line(ledger: &Ledger, month: &MonthKey, scope: PaidLeaveScope) -> String {
    let s = ledger.summarize_month(month);
    let paid_leave = ledger.paid_leave_days(month, scope);
    let scope_label = match scope {
        PaidLeaveScope::Month => "this month",
        PaidLeaveScope::Year => "this year",
    };

    format!(
        "Overtime {} / Holiday work {} ({}) / Paid leave {} {}",
        colorize_count(&hm(s.total_overtime_minutes), s.total_overtime_minutes, ORANGE),
        colorize_count(
            &plural_days(s.holiday_work_day_count),
            s.holiday_work_day_count,
            YELLOW
        ),
        hm(s.total_holiday_work_minutes),
        colorize_count(&plural_days(paid_leave), paid_leave, CYAN),
        scope_label
    )
}
