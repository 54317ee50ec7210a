//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define data access contracts for the two persisted tables.
//! - Isolate SQLite query details from the store layer.
//!
//! # Invariants
//! - Table DDL is idempotent; `ensure_schema` succeeds on existing tables.
//! - Read paths apply the load policy: unparsable dates are dropped,
//!   unrecognized kinds fall back to `Primary`.

pub mod mark_repo;
pub mod settings_repo;
