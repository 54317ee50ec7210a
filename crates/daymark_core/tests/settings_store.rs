use daymark_core::db::{open_db, open_db_in_memory, shared};
use daymark_core::{DateSelectionStore, SelectionKind, SettingsStore, ThemeMode};
use std::sync::Arc;

#[test]
fn empty_storage_reads_as_follow_system() {
    let store = SettingsStore::new(shared(open_db_in_memory().unwrap())).unwrap();
    assert_eq!(store.theme(), ThemeMode::FollowSystem);
}

#[test]
fn the_default_is_never_written_back() {
    let conn = shared(open_db_in_memory().unwrap());
    let store = SettingsStore::new(Arc::clone(&conn)).unwrap();
    assert_eq!(store.theme(), ThemeMode::FollowSystem);

    let guard = conn.lock().unwrap();
    let rows: i64 = guard
        .query_row("SELECT COUNT(*) FROM settings;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 0);
}

#[test]
fn set_theme_persists_across_reconstruction() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("daymark.db");

    {
        let store = SettingsStore::new(shared(open_db(&path).unwrap())).unwrap();
        store.set_theme(ThemeMode::Dark).unwrap();
    }

    let reopened = SettingsStore::new(shared(open_db(&path).unwrap())).unwrap();
    assert_eq!(reopened.theme(), ThemeMode::Dark);
}

#[test]
fn unparsable_persisted_value_falls_back_to_follow_system() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO settings (key, value) VALUES ('theme', 'SOLARIZED');",
        [],
    )
    .unwrap();

    let store = SettingsStore::new(shared(conn)).unwrap();
    assert_eq!(store.theme(), ThemeMode::FollowSystem);
}

#[test]
fn observers_see_current_value_then_every_set() {
    let store = SettingsStore::new(shared(open_db_in_memory().unwrap())).unwrap();

    let mut observer = store.observe();
    assert_eq!(*observer.borrow_and_update(), ThemeMode::FollowSystem);

    store.set_theme(ThemeMode::Bright).unwrap();
    assert!(observer.has_changed().unwrap());
    assert_eq!(*observer.borrow_and_update(), ThemeMode::Bright);

    store.set_theme(ThemeMode::Dark).unwrap();
    assert_eq!(*observer.borrow_and_update(), ThemeMode::Dark);
}

#[test]
fn both_stores_share_one_connection() {
    let conn = shared(open_db_in_memory().unwrap());
    let selection = DateSelectionStore::new(Arc::clone(&conn)).unwrap();
    let settings = SettingsStore::new(Arc::clone(&conn)).unwrap();

    selection
        .toggle("2024-09-15".parse().unwrap(), SelectionKind::Primary)
        .unwrap();
    settings.set_theme(ThemeMode::Dark).unwrap();

    assert_eq!(selection.snapshot().len(), 1);
    assert_eq!(settings.theme(), ThemeMode::Dark);
}
