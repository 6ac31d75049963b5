//! Detect and fill fields missing from an existing configuration file.

use super::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn defaults_mapping() -> AppResult<Mapping> {
    let value = serde_yaml::to_value(Config::default()).map_err(|_| AppError::ConfigSave)?;
    value
        .as_mapping()
        .cloned()
        .ok_or_else(|| AppError::Config("default configuration is not a mapping".into()))
}

fn parse_mapping(content: &str) -> AppResult<Mapping> {
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }
    let yaml: Value =
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
    yaml.as_mapping()
        .cloned()
        .ok_or_else(|| AppError::Config("configuration file is not a YAML mapping".into()))
}

/// Names of the fields that `content` lacks, in declaration order.
pub fn missing_fields(content: &str) -> AppResult<Vec<String>> {
    let current = parse_mapping(content)?;
    Ok(defaults_mapping()?
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing field with its default value, keeping existing ones.
/// Returns the names of the fields added.
pub fn fill_missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let mut current = parse_mapping(&content)?;

    let mut added = Vec::new();
    for (k, v) in defaults_mapping()? {
        if !current.contains_key(&k) {
            if let Some(name) = k.as_str() {
                added.push(name.to_string());
            }
            current.insert(k, v);
        }
    }

    if added.is_empty() {
        info("Configuration is complete, nothing to add.");
        return Ok(added);
    }

    let yaml = serde_yaml::to_string(&Value::Mapping(current)).map_err(|_| AppError::ConfigSave)?;
    fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;

    success(format!("Added missing fields: {}", added.join(", ")));
    Ok(added)
}
