use crate::cli::commands::open_book;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar_view::CalendarView;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { month, prev, next } = cmd {
        let base = date::parse_month_or_current(month.as_deref())?;

        // --prev / --next behave like swiping the calendar
        let steps = |n: u32| {
            i32::try_from(n)
                .map_err(|_| AppError::InvalidMonth(format!("cannot move {n} months")))
        };
        let offset = match (prev, next) {
            (Some(n), _) => -steps(*n)?,
            (None, Some(n)) => steps(*n)?,
            (None, None) => 0,
        };
        let month = base.shift(offset);

        let book = open_book(cfg)?;
        let view = CalendarView {
            ledger: book.ledger(),
            month,
            week_start: cfg.week_start,
            paid_leave_scope: cfg.paid_leave_scope,
            show_holidays: cfg.show_holidays,
        };

        print!("{}", view.render());
    }

    Ok(())
}
