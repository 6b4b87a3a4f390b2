//! The logged-in identity, mirrored to durable storage.

use crate::{KeyValueStore, StoreResult};
use desk_model::Session;
use tracing::{debug, info, warn};

/// Storage key holding the JSON-encoded [`Session`].
pub const SESSION_KEY: &str = "user";

/// Owns the current session.
///
/// The stored value is read once, by [`open`](Self::open). Every later change
/// updates memory first and then storage.
pub struct SessionStore<S> {
    storage: S,
    current: Option<Session>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Rehydrates the session from `storage`.
    ///
    /// A missing, unreadable or malformed value means "logged out"; the
    /// problem is logged and never returned.
    pub fn open(storage: S) -> Self {
        let current = match storage.get(SESSION_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) => {
                    debug!("Restored session for {}", session.email);
                    Some(session)
                }
                Err(e) => {
                    warn!("Ignoring malformed stored session: {e}");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Could not read stored session: {e}");
                None
            }
        };

        Self { storage, current }
    }

    /// Records `session` as the current identity and persists it.
    pub fn login(&mut self, session: Session) -> StoreResult<()> {
        let raw = serde_json::to_string(&session)?;
        info!("Logged in as {}", session.email);
        self.current = Some(session);
        self.storage.set(SESSION_KEY, &raw)
    }

    /// Clears the current identity and removes it from storage.
    pub fn logout(&mut self) -> StoreResult<()> {
        if let Some(session) = self.current.take() {
            info!("Logged out {}", session.email);
        }
        self.storage.remove(SESSION_KEY)
    }

    pub fn current_session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
