use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::repo::SessionStore;

/// In-memory SessionStore for tests and native builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
    }

    fn remove_item(&self, key: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::{SessionRepository, TOKEN_KEY, USER_KEY};
    use crate::session::{Role, Session, SessionUser};

    fn admin() -> SessionUser {
        SessionUser {
            id: Some(1),
            name: "Admin".into(),
            email: "admin@lib.io".into(),
            role: Role::Admin,
            avatar: None,
        }
    }

    #[test]
    fn test_empty_store_loads_signed_out_session() {
        let repo = SessionRepository::new(MemoryStore::new());
        let session = repo.load();
        assert_eq!(session, Session::default());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_save_and_load_session() {
        let repo = SessionRepository::new(MemoryStore::new());
        repo.save(&Session {
            token: Some("t-1".into()),
            user: Some(admin()),
        });

        let session = repo.load();
        assert_eq!(session.token.as_deref(), Some("t-1"));
        assert_eq!(session.role(), Role::Admin);
        assert_eq!(session.user.unwrap().email, "admin@lib.io");
    }

    #[test]
    fn test_legacy_object_role_is_normalized_on_load() {
        let store = MemoryStore::new();
        store.set_item(TOKEN_KEY, "abc");
        store.set_item(
            USER_KEY,
            r#"{"id": 7, "name": "Root", "email": "r@lib.io", "role": {"id": 1, "name": "admin"}}"#,
        );
        let repo = SessionRepository::new(store.clone());
        assert_eq!(repo.load().role(), Role::Admin);

        // Re-saving writes the canonical bare-string shape
        repo.save_user(&repo.user().unwrap());
        let raw = store.get_item(USER_KEY).unwrap();
        assert!(raw.contains(r#""role":"admin""#));
    }

    #[test]
    fn test_unreadable_user_is_ignored() {
        let store = MemoryStore::new();
        store.set_item(TOKEN_KEY, "abc");
        store.set_item(USER_KEY, "{not json");
        let repo = SessionRepository::new(store);
        let session = repo.load();
        assert!(session.is_authenticated());
        assert!(session.user.is_none());
    }

    #[test]
    fn test_clear_removes_token_and_user() {
        let store = MemoryStore::new();
        let repo = SessionRepository::new(store.clone());
        repo.save_token("abc");
        repo.save_user(&admin());

        repo.clear();

        assert!(store.get_item(TOKEN_KEY).is_none());
        assert!(store.get_item(USER_KEY).is_none());
        assert!(!repo.load().is_authenticated());
    }

    #[test]
    fn test_save_with_none_removes_keys() {
        let store = MemoryStore::new();
        let repo = SessionRepository::new(store.clone());
        repo.save_token("abc");
        repo.save(&Session {
            token: None,
            user: Some(admin()),
        });
        assert!(store.get_item(TOKEN_KEY).is_none());
        assert!(store.get_item(USER_KEY).is_some());
    }
}
