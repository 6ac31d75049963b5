//! In-memory attendance ledger: one `Record` per `DayKey`.
//!
//! A key is present if and only if its record is non-empty. `upsert`
//! enforces this, and so does `from_blob` for data written by older or
//! foreign writers.

use crate::errors::{AppError, AppResult};
use crate::models::keys::DayKey;
use crate::models::record::Record;
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Result of an upsert, so callers can tell the user what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Stored,
    Removed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    records: BTreeMap<DayKey, Record>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a stored blob.
    ///
    /// Never fails: an absent blob, or one that is not a JSON object, gives
    /// an empty ledger. Entries whose key is not a canonical `YYYY-MM-DD`
    /// or whose value cannot be decoded are skipped, as are empty records.
    pub fn from_blob(blob: Option<&str>) -> Self {
        let Some(raw) = blob else {
            return Self::new();
        };

        let Ok(map) = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(raw)
        else {
            return Self::new();
        };

        let records = map
            .into_iter()
            .filter_map(|(k, v)| {
                let key = k.parse::<DayKey>().ok()?;
                let record = serde_json::from_value::<Record>(v).ok()?;
                (!record.is_empty()).then_some((key, record))
            })
            .collect();

        Self { records }
    }

    /// Encode the whole ledger as the single stored blob.
    pub fn to_blob(&self) -> AppResult<String> {
        let map: BTreeMap<String, &Record> = self
            .records
            .iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();

        serde_json::to_string(&map)
            .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))
    }

    /// Set or replace the record at `key`; an empty record removes the key.
    pub fn upsert(&mut self, key: DayKey, record: Record) -> UpsertOutcome {
        if record.is_empty() {
            self.records.remove(&key);
            UpsertOutcome::Removed
        } else {
            self.records.insert(key, record);
            UpsertOutcome::Stored
        }
    }

    pub fn get(&self, key: &DayKey) -> Option<&Record> {
        self.records.get(key)
    }

    pub fn contains(&self, key: &DayKey) -> bool {
        self.records.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DayKey, &Record)> {
        self.records.iter()
    }

    pub fn first_key(&self) -> Option<&DayKey> {
        self.records.keys().next()
    }

    pub fn last_key(&self) -> Option<&DayKey> {
        self.records.keys().next_back()
    }

    /// Entries whose rendered key starts with `prefix` (`YYYY-MM`, `YYYY-`, ...).
    pub fn entries_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a DayKey, &'a Record)> + 'a {
        self.records
            .iter()
            .filter(move |(k, _)| k.to_string().starts_with(prefix))
    }

    /// Entries between two days, both inclusive. A reversed range is empty.
    pub fn entries_between(
        &self,
        range: RangeInclusive<DayKey>,
    ) -> impl Iterator<Item = (&DayKey, &Record)> {
        (range.start() <= range.end())
            .then(|| self.records.range(range))
            .into_iter()
            .flatten()
    }
}
