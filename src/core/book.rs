//! Persistence bridge between the ledger and a key-value store.

use crate::core::ledger::{Ledger, UpsertOutcome};
use crate::errors::AppResult;
use crate::models::keys::DayKey;
use crate::models::record::Record;
use crate::store::KeyValueStore;

/// Key under which the whole ledger is stored as one JSON blob.
pub const DEFAULT_STORAGE_KEY: &str = "workRecords";

/// Owns one ledger and the store it is persisted to.
///
/// Every mutation rewrites the full blob before returning; there is no
/// deferred or partial write.
pub struct AttendanceBook<S: KeyValueStore> {
    ledger: Ledger,
    store: S,
    storage_key: String,
}

impl<S: KeyValueStore> AttendanceBook<S> {
    /// Read the blob once. Missing or malformed data gives an empty ledger;
    /// only a failing store is reported as an error.
    pub fn load(store: S, storage_key: impl Into<String>) -> AppResult<Self> {
        let storage_key = storage_key.into();
        let blob = store.get_string(&storage_key)?;
        let ledger = Ledger::from_blob(blob.as_deref());

        Ok(Self {
            ledger,
            store,
            storage_key,
        })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn upsert(&mut self, key: DayKey, record: Record) -> AppResult<UpsertOutcome> {
        let outcome = self.ledger.upsert(key, record);
        self.persist()?;
        Ok(outcome)
    }

    /// Write the full ledger under the storage key.
    pub fn persist(&mut self) -> AppResult<()> {
        let blob = self.ledger.to_blob()?;
        self.store.set_string(&self.storage_key, &blob)
    }

    pub fn into_parts(self) -> (Ledger, S) {
        (self.ledger, self.store)
    }
}
