use crate::cli::commands::open_book;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::set::{SetLogic, describe};
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::date;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear {
        date: date_str,
        yes,
    } = cmd
    {
        let key = date::parse_day_key(date_str)?;
        let mut book = open_book(cfg)?;

        let Some(current) = book.ledger().get(&key).copied() else {
            info(format!("Nothing recorded for {}", key));
            return Ok(());
        };

        if !*yes {
            let prompt = format!("Clear {} ({})?", key, describe(&current));
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        SetLogic::clear(&mut book, key)?;
    }

    Ok(())
}
