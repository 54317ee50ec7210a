//! Domain model for marked dates and user settings.
//!
//! # Responsibility
//! - Define canonical data structures used by the stores.
//! - Own the codecs between enumeration values and their persisted names.
//!
//! # Invariants
//! - A calendar date carries no time component and compares by day.
//! - Persisted enumeration names are stable wire values; decoding an
//!   unknown name is an explicit error, never a panic.

pub mod mark;
pub mod theme;
