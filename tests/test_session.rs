use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use nutridb::models::Role;
use nutridb::session::{Session, SessionEvent, SessionStore};

fn sample() -> Session {
    Session { token: "tok-123".into(), user_id: 42, role: Role::User }
}

fn store_in(dir: &tempfile::TempDir) -> SessionStore {
    SessionStore::load(dir.path().join("session.json"))
}

#[test]
fn test_fresh_store_is_signed_out() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    assert!(store.current().is_none());
    assert!(store.token().is_none());
}

#[test]
fn test_set_then_current() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.set(sample()).unwrap();
    let session = store.current().unwrap();
    assert_eq!(session.user_id, 42);
    assert_eq!(session.role, Role::User);
    assert_eq!(store.token().unwrap(), "tok-123");
}

#[test]
fn test_session_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    SessionStore::load(path.clone()).set(sample()).unwrap();

    let reloaded = SessionStore::load(path);
    assert_eq!(reloaded.current().unwrap(), sample());
}

#[test]
fn test_persisted_file_holds_exactly_the_session_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    SessionStore::load(path.clone()).set(sample()).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 3);
    assert_eq!(obj["token"], "tok-123");
    assert_eq!(obj["user_id"], 42);
    assert_eq!(obj["role"], "user");
}

#[test]
fn test_corrupt_file_treated_as_signed_out() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{not json").unwrap();
    assert!(SessionStore::load(path).current().is_none());
}

#[test]
fn test_clear_removes_session_and_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let store = SessionStore::load(path.clone());
    store.set(sample()).unwrap();

    assert!(store.clear());
    assert!(store.current().is_none());
    assert!(!path.exists());
}

#[test]
fn test_clear_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.set(sample()).unwrap();
    assert!(store.clear());
    assert!(!store.clear());
    assert!(!store.clear());
}

#[test]
fn test_clear_when_never_signed_in() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    assert!(!store.clear());
}

#[test]
fn test_set_notifies_signed_in() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    store.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

    store.set(sample()).unwrap();
    assert_eq!(*events.lock().unwrap(), vec![SessionEvent::SignedIn(Role::User)]);
}

#[test]
fn test_clear_notifies_signed_out_exactly_once() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    let count = Arc::new(AtomicUsize::new(0));
    let sink = count.clone();
    store.subscribe(move |event| {
        if *event == SessionEvent::SignedOut {
            sink.fetch_add(1, Ordering::SeqCst);
        }
    });

    store.set(sample()).unwrap();
    store.clear();
    store.clear();
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    let count = Arc::new(AtomicUsize::new(0));
    let sink = count.clone();
    let id = store.subscribe(move |_| {
        sink.fetch_add(1, Ordering::SeqCst);
    });

    store.set(sample()).unwrap();
    store.unsubscribe(id);
    store.clear();
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_multiple_subscribers_all_notified() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    let count = Arc::new(AtomicUsize::new(0));
    for _ in 0..3 {
        let sink = count.clone();
        store.subscribe(move |_| {
            sink.fetch_add(1, Ordering::SeqCst);
        });
    }

    store.set(sample()).unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 3);
}

#[test]
fn test_listener_may_reenter_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(store_in(&dir));
    let seen = Arc::new(Mutex::new(None));
    let inner = store.clone();
    let sink = seen.clone();
    store.subscribe(move |event| {
        if let SessionEvent::SignedIn(_) = event {
            *sink.lock().unwrap() = inner.current();
        }
    });

    store.set(sample()).unwrap();
    assert_eq!(seen.lock().unwrap().as_ref().unwrap().user_id, 42);
}
