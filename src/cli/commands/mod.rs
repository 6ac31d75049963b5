pub mod backup;
pub mod clear;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod log;
pub mod set;
pub mod show;
pub mod summary;

use crate::config::Config;
use crate::core::book::AttendanceBook;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database and load the ledger stored in it.
pub(crate) fn open_book(cfg: &Config) -> AppResult<AttendanceBook<DbPool>> {
    let pool = DbPool::open(&cfg.database)?;
    AttendanceBook::load(pool, cfg.storage_key.as_str())
}
