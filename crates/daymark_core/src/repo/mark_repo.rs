//! Date mark repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide row-level access to the `selected_dates` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `insert_mark` is insert-or-replace; the date column is the key.
//! - `load_marks` never fails on malformed rows; it drops them and
//!   continues, emitting a `mark_load` warning per dropped row.

use crate::db::DbResult;
use crate::model::mark::{DateMark, SelectionKind};
use chrono::NaiveDate;
use log::warn;
use rusqlite::{params, Connection};

const CREATE_SELECTED_DATES_SQL: &str = "CREATE TABLE IF NOT EXISTS selected_dates (
    date TEXT PRIMARY KEY,
    type TEXT NOT NULL
);";

/// Repository interface for persisted date marks.
pub trait MarkRepository {
    /// Creates the `selected_dates` table when absent. Idempotent.
    fn ensure_schema(&self) -> DbResult<()>;
    /// Upserts one mark; an existing row for the same date is replaced.
    fn insert_mark(&self, mark: &DateMark) -> DbResult<()>;
    /// Deletes the mark for `date`; succeeds when no row exists.
    fn delete_mark(&self, date: NaiveDate) -> DbResult<()>;
    /// Reads every persisted mark, applying the drop/fallback load policy.
    fn load_marks(&self) -> DbResult<Vec<DateMark>>;
}

/// SQLite-backed mark repository.
pub struct SqliteMarkRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMarkRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl MarkRepository for SqliteMarkRepository<'_> {
    fn ensure_schema(&self) -> DbResult<()> {
        self.conn.execute_batch(CREATE_SELECTED_DATES_SQL)?;
        Ok(())
    }

    fn insert_mark(&self, mark: &DateMark) -> DbResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO selected_dates (date, type) VALUES (?1, ?2);",
            params![mark.date.to_string(), mark.kind.as_str()],
        )?;
        Ok(())
    }

    fn delete_mark(&self, date: NaiveDate) -> DbResult<()> {
        self.conn.execute(
            "DELETE FROM selected_dates WHERE date = ?1;",
            [date.to_string()],
        )?;
        Ok(())
    }

    fn load_marks(&self) -> DbResult<Vec<DateMark>> {
        let mut stmt = self.conn.prepare("SELECT date, type FROM selected_dates;")?;
        let mut rows = stmt.query([])?;
        let mut marks = Vec::new();

        while let Some(row) = rows.next()? {
            let date_text: String = row.get("date")?;
            let kind_text: String = row.get("type")?;

            let date = match date_text.parse::<NaiveDate>() {
                Ok(date) => date,
                Err(_) => {
                    warn!(
                        "event=mark_load module=repo status=dropped reason=bad_date value={date_text}"
                    );
                    continue;
                }
            };
            // Unknown kinds keep their row; reserved names from newer builds
            // collapse to the primary kind.
            let kind = SelectionKind::decode(&kind_text).unwrap_or(SelectionKind::Primary);
            marks.push(DateMark::new(date, kind));
        }

        Ok(marks)
    }
}
