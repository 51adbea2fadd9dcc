//! Credential store abstraction.

use std::sync::RwLock;

use crate::session::{Session, UserProfile};
use crate::tokens::{AccessToken, RefreshToken};

/// Shared session state: access credential, refresh credential, user
/// profile, and the one-shot "redirect after login" path.
///
/// The store is the single owner of the session. The API client reads
/// and mutates credentials exclusively through this interface, which
/// lets callers substitute an in-memory store for tests or a file-backed
/// store for a long-lived CLI session. Mutation discipline is last
/// write wins; no coordination is attempted across concurrent refreshes.
pub trait CredentialStore: Send + Sync {
    /// The current access credential, if any.
    fn access_token(&self) -> Option<AccessToken>;

    /// The current refresh credential, if any.
    fn refresh_token(&self) -> Option<RefreshToken>;

    /// The stored user profile, if any.
    fn user_profile(&self) -> Option<UserProfile>;

    /// Replace the whole session (login, registration, provider sign-in).
    fn store_session(&self, session: &Session);

    /// Overwrite only the access credential (token refresh).
    fn set_access_token(&self, token: AccessToken);

    /// Remember a path to return to after the next successful sign-in.
    fn set_redirect_path(&self, path: &str);

    /// Consume the remembered post-login path, if one was set.
    fn take_redirect_path(&self) -> Option<String>;

    /// Destroy the session and any remembered path.
    fn clear(&self);

    /// Whether both bearer credentials are present.
    fn is_authenticated(&self) -> bool {
        self.access_token().is_some() && self.refresh_token().is_some()
    }
}

#[derive(Default)]
struct MemoryState {
    access: Option<AccessToken>,
    refresh: Option<RefreshToken>,
    user: Option<UserProfile>,
    redirect_path: Option<String>,
}

/// In-process credential store.
///
/// Suitable for tests and for embedding the client in a host
/// application that manages its own persistence.
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn access_token(&self) -> Option<AccessToken> {
        self.state.read().unwrap().access.clone()
    }

    fn refresh_token(&self) -> Option<RefreshToken> {
        self.state.read().unwrap().refresh.clone()
    }

    fn user_profile(&self) -> Option<UserProfile> {
        self.state.read().unwrap().user.clone()
    }

    fn store_session(&self, session: &Session) {
        let mut state = self.state.write().unwrap();
        state.access = Some(session.access.clone());
        state.refresh = Some(session.refresh.clone());
        state.user = Some(session.user.clone());
    }

    fn set_access_token(&self, token: AccessToken) {
        self.state.write().unwrap().access = Some(token);
    }

    fn set_redirect_path(&self, path: &str) {
        self.state.write().unwrap().redirect_path = Some(path.to_string());
    }

    fn take_redirect_path(&self) -> Option<String> {
        self.state.write().unwrap().redirect_path.take()
    }

    fn clear(&self) {
        let mut state = self.state.write().unwrap();
        *state = MemoryState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> Session {
        Session::new(
            AccessToken::new("A1"),
            RefreshToken::new("R1"),
            UserProfile::default(),
        )
    }

    #[test]
    fn store_session_sets_all_three_keys() {
        let store = MemoryStore::new();
        assert!(!store.is_authenticated());

        store.store_session(&sample_session());
        assert!(store.is_authenticated());
        assert_eq!(store.access_token().unwrap().as_str(), "A1");
        assert_eq!(store.refresh_token().unwrap().as_str(), "R1");
        assert!(store.user_profile().is_some());
    }

    #[test]
    fn set_access_token_leaves_refresh_untouched() {
        let store = MemoryStore::new();
        store.store_session(&sample_session());

        store.set_access_token(AccessToken::new("A2"));
        assert_eq!(store.access_token().unwrap().as_str(), "A2");
        assert_eq!(store.refresh_token().unwrap().as_str(), "R1");
    }

    #[test]
    fn clear_destroys_everything() {
        let store = MemoryStore::new();
        store.store_session(&sample_session());
        store.set_redirect_path("/courses/");

        store.clear();
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
        assert!(store.user_profile().is_none());
        assert!(store.take_redirect_path().is_none());
    }

    #[test]
    fn redirect_path_is_one_shot() {
        let store = MemoryStore::new();
        store.set_redirect_path("/employees/");

        assert_eq!(store.take_redirect_path().as_deref(), Some("/employees/"));
        assert!(store.take_redirect_path().is_none());
    }
}
