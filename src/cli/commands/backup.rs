use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;
        BackupLogic::backup(&pool, cfg, file, *compress, *force)?;
    }

    Ok(())
}
