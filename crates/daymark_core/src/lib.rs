//! Core domain logic for Daymark.
//! This crate is the single source of truth for marked dates and settings.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use db::{open_db, open_db_in_memory, shared, DbError, DbResult, SharedConnection};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::mark::{DateMark, SelectionKind, UnknownSelectionKind};
pub use model::theme::{ThemeMode, UnknownThemeMode};
pub use repo::mark_repo::{MarkRepository, SqliteMarkRepository};
pub use repo::settings_repo::{SettingsRepository, SqliteSettingsRepository};
pub use store::selection::{DateSelectionStore, SelectionSnapshot};
pub use store::settings::SettingsStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
