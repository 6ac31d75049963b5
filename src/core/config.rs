use crate::config::{Config, check};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the configuration file, or the effective defaults when absent.
    pub fn print(path: &Path, cfg: &Config) -> AppResult<()> {
        if !path.exists() {
            warning(format!(
                "No configuration file at {}; showing effective settings.",
                path.display()
            ));
            let yaml = serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigLoad)?;
            println!("{}", yaml);
            return Ok(());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        println!("{}", content);
        Ok(())
    }

    pub fn check(path: &Path) -> AppResult<()> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "No configuration file at {}; run `init` first",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let missing = check::missing_fields(&content)?;
        if missing.is_empty() {
            info("Configuration is complete.");
            return Ok(());
        }

        warning(format!("Missing fields: {}", missing.join(", ")));
        check::fill_missing_fields(path)?;
        Ok(())
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let ed = editor
            .clone()
            .or_else(|| std::env::var("VISUAL").ok())
            .or_else(|| std::env::var("EDITOR").ok())
            .unwrap_or_else(|| {
                if cfg!(target_os = "windows") {
                    "notepad".into()
                } else {
                    "nano".into()
                }
            });

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("{ed}: {e}")))?;

        if !status.success() {
            return Err(AppError::Config(format!("{ed} exited with {status}")));
        }
        Ok(())
    }
}
