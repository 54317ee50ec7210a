//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `daymark_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use daymark_core::db::{open_db_in_memory, shared};
use daymark_core::{DateSelectionStore, SettingsStore};
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    println!("daymark_core version={}", daymark_core::core_version());

    // A tiny probe over an in-memory database validates that both stores
    // bootstrap against one shared connection.
    let conn = match open_db_in_memory() {
        Ok(conn) => shared(conn),
        Err(err) => {
            eprintln!("db open failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    let selection = match DateSelectionStore::new(Arc::clone(&conn)) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("selection store init failed: {err}");
            return ExitCode::FAILURE;
        }
    };
    let settings = match SettingsStore::new(conn) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("settings store init failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("daymark_core marks={}", selection.snapshot().len());
    println!("daymark_core theme={}", settings.theme());
    ExitCode::SUCCESS
}
