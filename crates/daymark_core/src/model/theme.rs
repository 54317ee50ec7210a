//! Theme preference domain model.
//!
//! # Responsibility
//! - Define the persisted theme enumeration and its name codec.
//! - Resolve the effective dark/bright flag from an explicit system input.
//!
//! # Invariants
//! - The default mode is `FollowSystem` and is never persisted implicitly.
//! - Resolution is a pure function; there is no process-wide theme state.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// User-selected theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMode {
    #[serde(rename = "BRIGHT")]
    Bright,
    #[serde(rename = "DARK")]
    Dark,
    #[default]
    #[serde(rename = "FOLLOW_SYSTEM")]
    FollowSystem,
}

impl ThemeMode {
    /// Stable persisted name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bright => "BRIGHT",
            Self::Dark => "DARK",
            Self::FollowSystem => "FOLLOW_SYSTEM",
        }
    }

    /// Decodes a persisted name.
    ///
    /// # Errors
    /// - Returns [`UnknownThemeMode`] when `value` matches no variant.
    pub fn decode(value: &str) -> Result<Self, UnknownThemeMode> {
        match value {
            "BRIGHT" => Ok(Self::Bright),
            "DARK" => Ok(Self::Dark),
            "FOLLOW_SYSTEM" => Ok(Self::FollowSystem),
            other => Err(UnknownThemeMode(other.to_string())),
        }
    }

    /// Resolves whether the dark palette applies.
    ///
    /// The host passes its own dark-mode flag; `FollowSystem` defers to it.
    pub fn is_dark(self, system_prefers_dark: bool) -> bool {
        match self {
            Self::Bright => false,
            Self::Dark => true,
            Self::FollowSystem => system_prefers_dark,
        }
    }
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode failure for a persisted theme mode name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownThemeMode(pub String);

impl Display for UnknownThemeMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown theme mode `{}`", self.0)
    }
}

impl Error for UnknownThemeMode {}
