//! Authoritative cache of the theme preference.
//!
//! # Responsibility
//! - Track the single persisted theme mode and keep it synchronized with
//!   the `settings` table.
//!
//! # Invariants
//! - An absent or unparsable persisted value reads as `FollowSystem`; that
//!   default lives in memory only and is never written back.
//! - A failed write leaves the in-memory value unchanged.

use crate::db::{self, DbResult, SharedConnection};
use crate::model::theme::ThemeMode;
use crate::repo::settings_repo::{SettingsRepository, SqliteSettingsRepository};
use log::warn;
use tokio::sync::watch;

const THEME_KEY: &str = "theme";

/// Observable store of the theme preference over a shared connection.
pub struct SettingsStore {
    conn: SharedConnection,
    theme: watch::Sender<ThemeMode>,
}

impl SettingsStore {
    /// Constructs the store: ensures the table exists, then loads the
    /// persisted theme, decoding-or-defaulting to `FollowSystem`.
    pub fn new(conn: SharedConnection) -> DbResult<Self> {
        let initial = {
            let guard = db::lock(&conn);
            let repo = SqliteSettingsRepository::new(&guard);
            repo.ensure_schema()?;

            match repo.read_value(THEME_KEY)? {
                Some(raw) => ThemeMode::decode(&raw).unwrap_or_else(|err| {
                    warn!("event=theme_load module=store status=fallback error={err}");
                    ThemeMode::default()
                }),
                None => ThemeMode::default(),
            }
        };

        let (theme, _) = watch::channel(initial);
        Ok(Self { conn, theme })
    }

    /// Persists `mode` under the theme key, then publishes it.
    pub fn set_theme(&self, mode: ThemeMode) -> DbResult<()> {
        let guard = db::lock(&self.conn);
        SqliteSettingsRepository::new(&guard).write_value(THEME_KEY, mode.as_str())?;
        self.theme.send_replace(mode);
        Ok(())
    }

    /// The current theme preference.
    pub fn theme(&self) -> ThemeMode {
        *self.theme.borrow()
    }

    /// Subscribes to theme changes. The receiver sees the current mode
    /// immediately, then one emission per `set_theme`.
    pub fn observe(&self) -> watch::Receiver<ThemeMode> {
        self.theme.subscribe()
    }
}
