//! Settings repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide key/value access to the `settings` table.
//!
//! # Invariants
//! - `write_value` is insert-or-replace keyed by `key`.
//! - Absent keys read as `None`, never as an error.

use crate::db::DbResult;
use rusqlite::{params, Connection, OptionalExtension};

const CREATE_SETTINGS_SQL: &str = "CREATE TABLE IF NOT EXISTS settings (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);";

/// Repository interface for the generic settings table.
pub trait SettingsRepository {
    /// Creates the `settings` table when absent. Idempotent.
    fn ensure_schema(&self) -> DbResult<()>;
    /// Reads the value stored under `key`, if any.
    fn read_value(&self, key: &str) -> DbResult<Option<String>>;
    /// Upserts the value stored under `key`.
    fn write_value(&self, key: &str, value: &str) -> DbResult<()>;
}

/// SQLite-backed settings repository.
pub struct SqliteSettingsRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSettingsRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SettingsRepository for SqliteSettingsRepository<'_> {
    fn ensure_schema(&self) -> DbResult<()> {
        self.conn.execute_batch(CREATE_SETTINGS_SQL)?;
        Ok(())
    }

    fn read_value(&self, key: &str) -> DbResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_value(&self, key: &str, value: &str) -> DbResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2);",
            params![key, value],
        )?;
        Ok(())
    }
}
