use desk_model::Session;
use desk_store::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, SESSION_KEY, SessionStore};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

// ── Memory-backed ────────────────────────────────────────────────

#[test]
fn fresh_store_has_no_session() {
    let store = SessionStore::open(MemoryKeyValueStore::new());
    assert_eq!(store.current_session(), None);
    assert!(!store.is_authenticated());
}

#[test]
fn login_survives_reload() {
    let storage = MemoryKeyValueStore::new();
    let mut store = SessionStore::open(storage.clone());

    store.login(Session::new("a@b.com")).unwrap();
    assert_eq!(store.current_session(), Some(&Session::new("a@b.com")));

    let reloaded = SessionStore::open(storage.clone());
    assert_eq!(reloaded.current_session(), Some(&Session::new("a@b.com")));
}

#[test]
fn logout_clears_memory_and_storage() {
    let storage = MemoryKeyValueStore::new();
    let mut store = SessionStore::open(storage.clone());
    store.login(Session::new("a@b.com")).unwrap();

    store.logout().unwrap();

    assert!(!store.is_authenticated());
    assert_eq!(storage.get(SESSION_KEY).unwrap(), None);
    assert_eq!(SessionStore::open(storage).current_session(), None);
}

#[test]
fn logout_without_session_is_ok() {
    let mut store = SessionStore::open(MemoryKeyValueStore::new());
    store.logout().unwrap();
    assert!(!store.is_authenticated());
}

#[test]
fn login_replaces_previous_session() {
    let storage = MemoryKeyValueStore::new();
    let mut store = SessionStore::open(storage.clone());
    store.login(Session::new("first@b.com")).unwrap();
    store.login(Session::new("second@b.com")).unwrap();

    let reloaded = SessionStore::open(storage);
    assert_eq!(reloaded.current_session(), Some(&Session::new("second@b.com")));
}

#[test]
fn stored_value_is_session_json() {
    let storage = MemoryKeyValueStore::new();
    let mut store = SessionStore::open(storage.clone());
    store.login(Session::new("a@b.com")).unwrap();

    let raw = storage.get(SESSION_KEY).unwrap().unwrap();
    assert_eq!(raw, r#"{"email":"a@b.com"}"#);
}

#[test]
fn malformed_stored_session_reads_as_logged_out() {
    let storage = MemoryKeyValueStore::new();
    storage.set(SESSION_KEY, "{not json").unwrap();
    assert_eq!(SessionStore::open(storage.clone()).current_session(), None);

    storage.set(SESSION_KEY, r#"{"name":"no email"}"#).unwrap();
    assert_eq!(SessionStore::open(storage).current_session(), None);
}

// ── File-backed ──────────────────────────────────────────────────

#[test]
fn file_session_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let mut store = SessionStore::open(FileKeyValueStore::new(dir.path()));
    store.login(Session::new("a@b.com")).unwrap();
    assert!(dir.path().join("user.json").exists());

    let reopened = SessionStore::open(FileKeyValueStore::new(dir.path()));
    assert_eq!(reopened.current_session(), Some(&Session::new("a@b.com")));
}

#[test]
fn file_logout_removes_file() {
    let dir = TempDir::new().unwrap();
    let mut store = SessionStore::open(FileKeyValueStore::new(dir.path()));
    store.login(Session::new("a@b.com")).unwrap();

    store.logout().unwrap();

    assert!(!dir.path().join("user.json").exists());
    let reopened = SessionStore::open(FileKeyValueStore::new(dir.path()));
    assert!(!reopened.is_authenticated());
}

#[test]
fn file_malformed_session_reads_as_logged_out() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("user.json"), b"\x00garbage").unwrap();

    let store = SessionStore::open(FileKeyValueStore::new(dir.path()));
    assert_eq!(store.current_session(), None);
}
