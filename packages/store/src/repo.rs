//! # Session repository: typed access to persisted client state
//!
//! [`SessionStore`] is the storage seam: a flat string key/value interface
//! matching what the browser's `localStorage` offers. Implementations live in
//! sibling modules ([`crate::memory`], [`crate::local`]).
//!
//! [`SessionRepository`] sits on top and is the only code that knows the key
//! names and the JSON encoding of the user record:
//!
//! | Key | Value |
//! |-----|-------|
//! | `token` | bearer token, raw string |
//! | `user` | [`SessionUser`] as JSON |
//!
//! A user record that fails to parse is treated as absent rather than an
//! error, so a stale or hand-edited value never locks the console.

use std::sync::Arc;

use crate::session::{Session, SessionUser};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// String key/value storage.
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// Typed wrapper around a shared [`SessionStore`].
#[derive(Clone)]
pub struct SessionRepository {
    store: Arc<dyn SessionStore + Send + Sync>,
}

impl SessionRepository {
    pub fn new(store: impl SessionStore + Send + Sync + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Read token and user.
    pub fn load(&self) -> Session {
        Session {
            token: self.token(),
            user: self.user(),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.store
            .get_item(TOKEN_KEY)
            .filter(|t| !t.is_empty())
    }

    pub fn user(&self) -> Option<SessionUser> {
        let raw = self.store.get_item(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Ignoring unreadable stored user record: {e}");
                None
            }
        }
    }

    pub fn save_token(&self, token: &str) {
        self.store.set_item(TOKEN_KEY, token);
    }

    pub fn save_user(&self, user: &SessionUser) {
        match serde_json::to_string(user) {
            Ok(json) => self.store.set_item(USER_KEY, &json),
            Err(e) => tracing::error!("Failed to encode user record: {e}"),
        }
    }

    /// Persist a whole session, removing keys that are `None`.
    pub fn save(&self, session: &Session) {
        match &session.token {
            Some(token) => self.save_token(token),
            None => self.store.remove_item(TOKEN_KEY),
        }
        match &session.user {
            Some(user) => self.save_user(user),
            None => self.store.remove_item(USER_KEY),
        }
    }

    /// Forget everything. Used by logout and on 401.
    pub fn clear(&self) {
        self.store.remove_item(TOKEN_KEY);
        self.store.remove_item(USER_KEY);
    }
}

impl std::fmt::Debug for SessionRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRepository")
            .field("authenticated", &self.load().is_authenticated())
            .finish()
    }
}
