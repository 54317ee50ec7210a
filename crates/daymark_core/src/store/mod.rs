//! Observable state stores.
//!
//! # Responsibility
//! - Own the authoritative in-memory view of persisted state.
//! - Keep that view in lock-step with the database on every mutation.
//! - Publish snapshots to observers through `tokio::sync::watch`.
//!
//! # Invariants
//! - A snapshot is published only after its persisted write committed.
//! - Mutations on a store never interleave; the shared connection lock is
//!   held across read-check, write, and publish.
//! - Read accessors never touch storage.

pub mod selection;
pub mod settings;
