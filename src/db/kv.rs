//! The `kv` table: string values addressed by string keys.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::KeyValueStore;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub fn get_value(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let mut stmt = conn.prepare_cached("SELECT value FROM kv WHERE key = ?1")?;
    let value = stmt
        .query_row([key], |row| row.get::<_, String>(0))
        .optional()?;
    Ok(value)
}

pub fn set_value(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO kv (key, value, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
    )?;
    stmt.execute(params![key, value, now])?;
    Ok(())
}

/// Last write time of a key, as stored (RFC 3339).
pub fn updated_at(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let value = conn
        .query_row("SELECT updated_at FROM kv WHERE key = ?1", [key], |row| {
            row.get::<_, String>(0)
        })
        .optional()?;
    Ok(value)
}

impl KeyValueStore for DbPool {
    fn get_string(&self, key: &str) -> AppResult<Option<String>> {
        get_value(&self.conn, key)
    }

    fn set_string(&mut self, key: &str, value: &str) -> AppResult<()> {
        set_value(&self.conn, key, value)
    }
}
