//! Date mark domain model.
//!
//! # Responsibility
//! - Define the association between a calendar date and a selection kind.
//! - Provide the codec between `SelectionKind` and its persisted name.
//!
//! # Invariants
//! - At most one `SelectionKind` exists per date; the store layer dedupes.
//! - `decode` returns an error for unknown names; the read boundary decides
//!   whether to fall back to `Primary`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Why a date is marked.
///
/// Only `Primary` is driven by the UI today; the remaining variants are
/// reserved slots decoded from storage so older databases keep their rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionKind {
    #[serde(rename = "PRIMARY")]
    Primary,
    #[serde(rename = "TYPE_2")]
    Type2,
    #[serde(rename = "TYPE_3")]
    Type3,
    #[serde(rename = "TYPE_4")]
    Type4,
    #[serde(rename = "TYPE_5")]
    Type5,
    #[serde(rename = "TYPE_6")]
    Type6,
    #[serde(rename = "TYPE_7")]
    Type7,
    #[serde(rename = "TYPE_8")]
    Type8,
    #[serde(rename = "TYPE_9")]
    Type9,
    #[serde(rename = "TYPE_10")]
    Type10,
    #[serde(rename = "TYPE_11")]
    Type11,
    #[serde(rename = "TYPE_12")]
    Type12,
    #[serde(rename = "TYPE_13")]
    Type13,
    #[serde(rename = "TYPE_14")]
    Type14,
    #[serde(rename = "TYPE_15")]
    Type15,
}

impl SelectionKind {
    /// Every variant, in persisted-name order.
    pub const ALL: [SelectionKind; 15] = [
        Self::Primary,
        Self::Type2,
        Self::Type3,
        Self::Type4,
        Self::Type5,
        Self::Type6,
        Self::Type7,
        Self::Type8,
        Self::Type9,
        Self::Type10,
        Self::Type11,
        Self::Type12,
        Self::Type13,
        Self::Type14,
        Self::Type15,
    ];

    /// Stable persisted name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "PRIMARY",
            Self::Type2 => "TYPE_2",
            Self::Type3 => "TYPE_3",
            Self::Type4 => "TYPE_4",
            Self::Type5 => "TYPE_5",
            Self::Type6 => "TYPE_6",
            Self::Type7 => "TYPE_7",
            Self::Type8 => "TYPE_8",
            Self::Type9 => "TYPE_9",
            Self::Type10 => "TYPE_10",
            Self::Type11 => "TYPE_11",
            Self::Type12 => "TYPE_12",
            Self::Type13 => "TYPE_13",
            Self::Type14 => "TYPE_14",
            Self::Type15 => "TYPE_15",
        }
    }

    /// Decodes a persisted name.
    ///
    /// # Errors
    /// - Returns [`UnknownSelectionKind`] when `value` matches no variant.
    pub fn decode(value: &str) -> Result<Self, UnknownSelectionKind> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| UnknownSelectionKind(value.to_string()))
    }
}

impl Display for SelectionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode failure for a persisted selection kind name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSelectionKind(pub String);

impl Display for UnknownSelectionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown selection kind `{}`", self.0)
    }
}

impl Error for UnknownSelectionKind {}

/// Persisted association between a calendar date and a selection kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateMark {
    /// Calendar day, no time component; serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Serialized as `type` to match the persisted column name.
    #[serde(rename = "type")]
    pub kind: SelectionKind,
}

impl DateMark {
    pub fn new(date: NaiveDate, kind: SelectionKind) -> Self {
        Self { date, kind }
    }

    /// Convenience constructor for the one UI-driven kind.
    pub fn primary(date: NaiveDate) -> Self {
        Self::new(date, SelectionKind::Primary)
    }
}
