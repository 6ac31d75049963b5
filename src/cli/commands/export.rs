use crate::cli::commands::open_book;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_or_warn;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let book = open_book(cfg)?;
        let rows = ExportLogic::export(book.ledger(), *format, file, range, *force)?;

        if rows > 0 {
            ttlog_or_warn(
                &book.store().conn,
                "export",
                file,
                &format!(
                    "{} day(s) exported as {} (range: {})",
                    rows,
                    format.as_str(),
                    range.as_deref().unwrap_or("all")
                ),
            );
        }
    }
    Ok(())
}
