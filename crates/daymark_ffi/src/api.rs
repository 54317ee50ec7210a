//! FFI use-case API for calendar-UI-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to the UI host.
//! - Keep error semantics simple for early-stage UI integration.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Return values are response envelopes with stable meaning.

use chrono::NaiveDate;
use daymark_core::db::{open_db, shared};
use daymark_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, DateSelectionStore,
    DbResult, SelectionKind, SettingsStore, ThemeMode,
};
use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DB_FILE_NAME: &str = "daymark.sqlite3";
static APP_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One marked date returned by the mark listing API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkItem {
    /// ISO `YYYY-MM-DD` calendar date.
    pub date: String,
    /// Persisted selection kind name (`PRIMARY`, `TYPE_2`, ...).
    pub kind: String,
}

/// Action response envelope for mark mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkActionResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Presence of the date after the operation, when known.
    pub marked: Option<bool>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl MarkActionResponse {
    fn success(message: impl Into<String>, marked: Option<bool>) -> Self {
        Self {
            ok: true,
            marked,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            marked: None,
            message: message.into(),
        }
    }
}

/// Listing response envelope for marked dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarksResponse {
    /// Marked dates in calendar order (empty on failure).
    pub items: Vec<MarkItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Response envelope for theme reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Effective theme mode name after the operation.
    pub mode: String,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Flips the presence of one date, default kind `PRIMARY`.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - `marked` reports presence after the flip on success.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_date(date: String, kind: Option<String>) -> MarkActionResponse {
    let (day, kind) = match parse_mark_input(&date, kind.as_deref()) {
        Ok(parsed) => parsed,
        Err(message) => return MarkActionResponse::failure(message),
    };
    match with_selection_store(|store| store.toggle(day, kind)) {
        Ok(marked) => {
            let message = if marked { "Date marked." } else { "Date unmarked." };
            MarkActionResponse::success(message, Some(marked))
        }
        Err(err) => MarkActionResponse::failure(format!("toggle_date failed: {err}")),
    }
}

/// Marks one date with the given kind, replacing any prior kind.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn set_date(date: String, kind: String) -> MarkActionResponse {
    let (day, kind) = match parse_mark_input(&date, Some(kind.as_str())) {
        Ok(parsed) => parsed,
        Err(message) => return MarkActionResponse::failure(message),
    };
    match with_selection_store(|store| store.set(day, kind)) {
        Ok(()) => MarkActionResponse::success("Date marked.", Some(true)),
        Err(err) => MarkActionResponse::failure(format!("set_date failed: {err}")),
    }
}

/// Unmarks one date; succeeds when the date was not marked.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn remove_date(date: String) -> MarkActionResponse {
    let day = match parse_date(&date) {
        Ok(day) => day,
        Err(message) => return MarkActionResponse::failure(message),
    };
    match with_selection_store(|store| store.remove(day)) {
        Ok(()) => MarkActionResponse::success("Date unmarked.", Some(false)),
        Err(err) => MarkActionResponse::failure(format!("remove_date failed: {err}")),
    }
}

/// Lists every marked date in calendar order.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn selected_dates() -> MarksResponse {
    match with_selection_store(|store| Ok(store.snapshot())) {
        Ok(snapshot) => {
            let mut items: Vec<MarkItem> = snapshot
                .into_iter()
                .map(|(date, kind)| MarkItem {
                    date: date.to_string(),
                    kind: kind.as_str().to_string(),
                })
                .collect();
            items.sort_by(|a, b| a.date.cmp(&b.date));
            let message = if items.is_empty() {
                "No marked dates.".to_string()
            } else {
                format!("{} marked date(s).", items.len())
            };
            MarksResponse { items, message }
        }
        Err(err) => MarksResponse {
            items: Vec::new(),
            message: format!("selected_dates failed: {err}"),
        },
    }
}

/// Reads the persisted theme preference.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; falls back to `FOLLOW_SYSTEM` in the reported mode on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn current_theme() -> ThemeResponse {
    match with_settings_store(|store| Ok(store.theme())) {
        Ok(mode) => ThemeResponse {
            ok: true,
            mode: mode.as_str().to_string(),
            message: "Theme loaded.".to_string(),
        },
        Err(err) => ThemeResponse {
            ok: false,
            mode: ThemeMode::default().as_str().to_string(),
            message: format!("current_theme failed: {err}"),
        },
    }
}

/// Persists a theme preference by name.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; unknown mode names fail without touching storage.
#[flutter_rust_bridge::frb(sync)]
pub fn set_theme(mode: String) -> ThemeResponse {
    let parsed = match ThemeMode::decode(mode.as_str()) {
        Ok(parsed) => parsed,
        Err(err) => {
            return ThemeResponse {
                ok: false,
                mode: ThemeMode::default().as_str().to_string(),
                message: format!("set_theme failed: {err}"),
            };
        }
    };
    match with_settings_store(|store| store.set_theme(parsed)) {
        Ok(()) => ThemeResponse {
            ok: true,
            mode: parsed.as_str().to_string(),
            message: "Theme saved.".to_string(),
        },
        Err(err) => ThemeResponse {
            ok: false,
            mode: ThemeMode::default().as_str().to_string(),
            message: format!("set_theme failed: {err}"),
        },
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    value
        .trim()
        .parse::<NaiveDate>()
        .map_err(|_| format!("invalid date `{value}`; expected YYYY-MM-DD"))
}

fn parse_mark_input(
    date: &str,
    kind: Option<&str>,
) -> Result<(NaiveDate, SelectionKind), String> {
    let day = parse_date(date)?;
    let kind = match kind {
        Some(raw) => SelectionKind::decode(raw.trim()).map_err(|err| err.to_string())?,
        None => SelectionKind::Primary,
    };
    Ok((day, kind))
}

fn resolve_app_db_path() -> PathBuf {
    APP_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("DAYMARK_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(APP_DB_FILE_NAME)
        })
        .clone()
}

fn with_selection_store<T>(
    f: impl FnOnce(&DateSelectionStore) -> DbResult<T>,
) -> Result<T, String> {
    let db_path = resolve_app_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("app DB open failed: {err}"))?;
    let store = DateSelectionStore::new(shared(conn))
        .map_err(|err| format!("selection store init failed: {err}"))?;
    f(&store).map_err(|err| err.to_string())
}

fn with_settings_store<T>(f: impl FnOnce(&SettingsStore) -> DbResult<T>) -> Result<T, String> {
    let db_path = resolve_app_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("app DB open failed: {err}"))?;
    let store =
        SettingsStore::new(shared(conn)).map_err(|err| format!("settings store init failed: {err}"))?;
    f(&store).map_err(|err| err.to_string())
}
