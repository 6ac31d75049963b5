use crate::cli::commands::open_book;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::SummaryLogic;
use crate::errors::AppResult;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        month,
        year,
        paid_leave_scope,
    } = cmd
    {
        let book = open_book(cfg)?;

        if let Some(y) = year {
            SummaryLogic::print_year(book.ledger(), *y, &cfg.separator_char)?;
        } else {
            let m = date::parse_month_or_current(month.as_deref())?;
            let scope = paid_leave_scope.unwrap_or(cfg.paid_leave_scope);
            SummaryLogic::print_month(book.ledger(), &m, scope, &cfg.separator_char);
        }
    }

    Ok(())
}
