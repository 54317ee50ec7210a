//! Authoritative cache of marked dates.
//!
//! # Responsibility
//! - Track which dates are marked, and with which kind.
//! - Mirror every mutation to the `selected_dates` table before publishing.
//!
//! # Invariants
//! - At most one kind per date; inserting over a marked date replaces it.
//! - The mapping is loaded once at construction and never re-read.
//! - A failed write leaves the in-memory mapping unchanged.

use crate::db::{self, DbResult, SharedConnection};
use crate::model::mark::{DateMark, SelectionKind};
use crate::repo::mark_repo::{MarkRepository, SqliteMarkRepository};
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};
use tokio::sync::watch;

/// Full in-memory mapping of marked dates at a point in time.
pub type SelectionSnapshot = HashMap<NaiveDate, SelectionKind>;

/// Observable store of marked dates over a shared connection.
pub struct DateSelectionStore {
    conn: SharedConnection,
    snapshot: watch::Sender<SelectionSnapshot>,
}

impl DateSelectionStore {
    /// Constructs the store: ensures the table exists, then performs the
    /// one full load that seeds the observable mapping.
    ///
    /// Rows with an unparsable date are dropped; rows with an unrecognized
    /// kind fall back to `Primary` (load policy of the repository).
    pub fn new(conn: SharedConnection) -> DbResult<Self> {
        let initial = {
            let guard = db::lock(&conn);
            let repo = SqliteMarkRepository::new(&guard);
            repo.ensure_schema()?;

            let mut mapping = SelectionSnapshot::new();
            for mark in repo.load_marks()? {
                mapping.insert(mark.date, mark.kind);
            }
            mapping
        };

        let (snapshot, _) = watch::channel(initial);
        Ok(Self { conn, snapshot })
    }

    /// Flips the presence of `date`.
    ///
    /// Marked dates are removed regardless of `kind`; unmarked dates are
    /// inserted with it. Returns whether `date` is marked afterwards.
    pub fn toggle(&self, date: NaiveDate, kind: SelectionKind) -> DbResult<bool> {
        let guard = db::lock(&self.conn);
        let repo = SqliteMarkRepository::new(&guard);

        let marked = self.snapshot.borrow().contains_key(&date);
        if marked {
            repo.delete_mark(date)?;
            self.snapshot.send_modify(|mapping| {
                mapping.remove(&date);
            });
            Ok(false)
        } else {
            repo.insert_mark(&DateMark::new(date, kind))?;
            self.snapshot.send_modify(|mapping| {
                mapping.insert(date, kind);
            });
            Ok(true)
        }
    }

    /// Unconditionally marks `date` with `kind`, replacing any prior kind.
    pub fn set(&self, date: NaiveDate, kind: SelectionKind) -> DbResult<()> {
        let guard = db::lock(&self.conn);
        SqliteMarkRepository::new(&guard).insert_mark(&DateMark::new(date, kind))?;
        self.snapshot.send_modify(|mapping| {
            mapping.insert(date, kind);
        });
        Ok(())
    }

    /// Unconditionally unmarks `date`; a no-op when it is not marked.
    ///
    /// Observers are notified only when the mapping actually changed.
    pub fn remove(&self, date: NaiveDate) -> DbResult<()> {
        let guard = db::lock(&self.conn);
        SqliteMarkRepository::new(&guard).delete_mark(date)?;
        self.snapshot
            .send_if_modified(|mapping| mapping.remove(&date).is_some());
        Ok(())
    }

    /// Whether `date` is currently marked.
    pub fn is_marked(&self, date: NaiveDate) -> bool {
        self.snapshot.borrow().contains_key(&date)
    }

    /// The kind `date` is marked with, if any.
    pub fn kind_of(&self, date: NaiveDate) -> Option<SelectionKind> {
        self.snapshot.borrow().get(&date).copied()
    }

    /// All dates marked with `kind`, in calendar order.
    pub fn dates_of_kind(&self, kind: SelectionKind) -> BTreeSet<NaiveDate> {
        self.snapshot
            .borrow()
            .iter()
            .filter(|(_, marked_kind)| **marked_kind == kind)
            .map(|(date, _)| *date)
            .collect()
    }

    /// A clone of the current mapping.
    pub fn snapshot(&self) -> SelectionSnapshot {
        self.snapshot.borrow().clone()
    }

    /// Subscribes to mapping snapshots. The receiver sees the current
    /// mapping immediately, then one emission per effective mutation.
    pub fn observe(&self) -> watch::Receiver<SelectionSnapshot> {
        self.snapshot.subscribe()
    }
}
