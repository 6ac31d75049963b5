use crate::core::ledger::Ledger;
use crate::db::kv;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(
    pool: &DbPool,
    db_path: &str,
    storage_key: &str,
    ledger: &Ledger,
) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) STORED KEYS
    //
    let keys: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM kv", [], |row| row.get(0))?;
    println!("{}• Stored keys:{} {}{}{}", CYAN, RESET, GREEN, keys, RESET);

    //
    // 3) LEDGER
    //
    println!(
        "{}• Recorded days:{} {}{}{} (key '{}')",
        CYAN,
        RESET,
        GREEN,
        ledger.len(),
        RESET,
        storage_key
    );

    let fmt_key = |k: Option<String>| k.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_key(ledger.first_key().map(|k| k.to_string())));
    println!("    to:   {}", fmt_key(ledger.last_key().map(|k| k.to_string())));

    //
    // 4) LAST WRITE
    //
    let last_write = kv::updated_at(&pool.conn, storage_key)?;
    println!("{}• Last write:{} {}", CYAN, RESET, fmt_key(last_write));

    println!();
    Ok(())
}
