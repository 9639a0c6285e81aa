//! Authentication Session
//!
//! Token-based session exposed as a Leptos signal and persisted across
//! reloads. A token is trusted until the backend rejects it; there is
//! no expiry tracking or refresh here.

use leptos::{create_rw_signal, RwSignal, SignalGet, SignalSet};
use std::rc::Rc;

use crate::state::storage::KeyValueStorage;

/// Storage key for the bearer token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";
/// Storage key for the signed-in username.
pub const USERNAME_KEY: &str = "username";

/// Current session value. Replaced wholesale on login/logout, never
/// partially updated, so `authenticated` always equals
/// `token.is_some()`.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub username: Option<String>,
    pub authenticated: bool,
}

impl SessionState {
    fn anonymous() -> Self {
        Self {
            token: None,
            username: None,
            authenticated: false,
        }
    }
}

/// Observable session handle.
#[derive(Clone)]
pub struct Session {
    state: RwSignal<SessionState>,
    storage: Rc<dyn KeyValueStorage>,
}

impl Session {
    /// Build a session from whatever the storage already holds, so the
    /// session survives page reloads.
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        let token = storage.get(AUTH_TOKEN_KEY);
        let username = storage.get(USERNAME_KEY);
        let state = SessionState {
            authenticated: token.is_some(),
            token,
            username,
        };
        Self {
            state: create_rw_signal(state),
            storage,
        }
    }

    /// Persist the credentials and mark the session authenticated.
    pub fn login(&self, token: &str, username: &str) {
        self.storage.set(AUTH_TOKEN_KEY, token);
        self.storage.set(USERNAME_KEY, username);
        self.state.set(SessionState {
            token: Some(token.to_string()),
            username: Some(username.to_string()),
            authenticated: true,
        });
    }

    /// Clear the persisted credentials and mark the session
    /// unauthenticated. Idempotent.
    pub fn logout(&self) {
        self.storage.remove(AUTH_TOKEN_KEY);
        self.storage.remove(USERNAME_KEY);
        self.state.set(SessionState::anonymous());
    }

    /// Synchronous read of the persisted token, independent of the
    /// signal subscription.
    pub fn token(&self) -> Option<String> {
        self.storage.get(AUTH_TOKEN_KEY)
    }

    /// Current session value, untracked contexts included.
    pub fn snapshot(&self) -> SessionState {
        self.state.get()
    }

    /// The underlying signal, for reactive views.
    pub fn signal(&self) -> RwSignal<SessionState> {
        self.state
    }

    /// Storage backend, shared with other persisted client flags.
    pub fn storage(&self) -> Rc<dyn KeyValueStorage> {
        self.storage.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::storage::MemoryStorage;

    #[test]
    fn login_persists_and_authenticates() {
        let runtime = leptos::create_runtime();
        let storage = Rc::new(MemoryStorage::new());
        let session = Session::new(storage.clone());

        assert!(!session.snapshot().authenticated);
        session.login("tok-abc", "user@x.com");

        let state = session.snapshot();
        assert!(state.authenticated);
        assert_eq!(state.token.as_deref(), Some("tok-abc"));
        assert_eq!(state.username.as_deref(), Some("user@x.com"));
        assert_eq!(storage.get(AUTH_TOKEN_KEY).as_deref(), Some("tok-abc"));
        assert_eq!(storage.get(USERNAME_KEY).as_deref(), Some("user@x.com"));

        runtime.dispose();
    }

    #[test]
    fn logout_clears_everything() {
        let runtime = leptos::create_runtime();
        let storage = Rc::new(MemoryStorage::new());
        let session = Session::new(storage.clone());

        session.login("tok-abc", "user@x.com");
        session.logout();

        let state = session.snapshot();
        assert_eq!(state, SessionState::anonymous());
        assert!(storage.get(AUTH_TOKEN_KEY).is_none());
        assert!(session.token().is_none());

        // Logging out again is harmless.
        session.logout();
        assert!(!session.snapshot().authenticated);

        runtime.dispose();
    }

    #[test]
    fn session_survives_restart_via_storage() {
        let runtime = leptos::create_runtime();
        let storage = Rc::new(MemoryStorage::new());

        Session::new(storage.clone()).login("tok-abc", "user@x.com");

        // A fresh session over the same storage sees the credentials.
        let revived = Session::new(storage);
        let state = revived.snapshot();
        assert!(state.authenticated);
        assert_eq!(state.username.as_deref(), Some("user@x.com"));
        assert_eq!(revived.token().as_deref(), Some("tok-abc"));

        runtime.dispose();
    }

    #[test]
    fn authenticated_tracks_token_presence() {
        let runtime = leptos::create_runtime();
        let session = Session::new(Rc::new(MemoryStorage::new()));

        let state = session.snapshot();
        assert_eq!(state.authenticated, state.token.is_some());

        session.login("t", "u");
        let state = session.snapshot();
        assert_eq!(state.authenticated, state.token.is_some());

        session.logout();
        let state = session.snapshot();
        assert_eq!(state.authenticated, state.token.is_some());

        runtime.dispose();
    }
}
