//! Synchronous string key-value storage used to persist the ledger.
//!
//! The SQLite implementation lives in `db::kv`; `MemoryStore` is handy for
//! tests and for embedding the ledger without a database file.

use crate::errors::AppResult;
use std::collections::HashMap;

pub trait KeyValueStore {
    fn get_string(&self, key: &str) -> AppResult<Option<String>>;
    fn set_string(&mut self, key: &str, value: &str) -> AppResult<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one value, e.g. a blob written by another tool.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get_string(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set_string(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
