//! Client-held session state: the credential, user id and role.
//!
//! The store is an explicit object handed to the HTTP adapter and the route
//! guard rather than ambient global state. Transitions broadcast a
//! `SessionEvent` to every subscriber synchronously, so nothing renders a
//! stale signed-in/signed-out state after a change it should have seen.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::Role;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn(Role),
    SignedOut,
}

type Listener = Arc<dyn Fn(&SessionEvent) + Send + Sync>;

struct Inner {
    session: Option<Session>,
    listeners: Vec<(u64, Listener)>,
    next_id: u64,
}

pub struct SessionStore {
    path: PathBuf,
    inner: Mutex<Inner>,
}

impl SessionStore {
    /// Opens the store, picking up a previously persisted session if the file
    /// exists and still parses. A corrupt file is treated as signed out.
    pub fn load(path: PathBuf) -> Self {
        let session = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok());
        Self {
            path,
            inner: Mutex::new(Inner { session, listeners: Vec::new(), next_id: 0 }),
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.lock().session.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.lock().session.as_ref().map(|s| s.token.clone())
    }

    /// Anonymous -> Authenticated. Persists the three session fields and
    /// notifies subscribers.
    pub fn set(&self, session: Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(&session)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("failed to write {}", self.path.display()))?;

        let role = session.role;
        self.lock().session = Some(session);
        self.notify(&SessionEvent::SignedIn(role));
        Ok(())
    }

    /// Authenticated -> Anonymous, on logout or an authentication failure.
    /// Idempotent: returns whether a session was actually removed, and only
    /// then notifies subscribers. Concurrent teardowns collapse into one
    /// broadcast.
    pub fn clear(&self) -> bool {
        let had_session = {
            let mut inner = self.lock();
            inner.session.take().is_some()
        };
        if had_session {
            let _ = fs::remove_file(&self.path);
            self.notify(&SessionEvent::SignedOut);
        }
        had_session
    }

    pub fn subscribe(&self, listener: impl Fn(&SessionEvent) + Send + Sync + 'static) -> u64 {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: u64) {
        self.lock().listeners.retain(|(lid, _)| *lid != id);
    }

    fn notify(&self, event: &SessionEvent) {
        // Listeners are invoked outside the lock so one of them can call back
        // into the store without deadlocking.
        let listeners: Vec<Listener> =
            self.lock().listeners.iter().map(|(_, l)| l.clone()).collect();
        for listener in listeners {
            listener(event);
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
