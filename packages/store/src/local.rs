//! # localStorage session store: browser-side persistence
//!
//! [`LocalStorageStore`] is the [`SessionStore`] used on the web platform. It
//! reads and writes the window's `localStorage`, so the session survives page
//! reloads and is shared between tabs.
//!
//! The struct is zero-sized and looks up the `Storage` handle on every call;
//! `web_sys::Storage` is not `Send`, and the lookup is cheap. Every failure
//! (storage disabled, quota exceeded, private mode) degrades to "nothing
//! stored" and is logged, never raised.

use crate::repo::SessionStore;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStorageStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            tracing::warn!("localStorage unavailable, dropping write of {key}");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("localStorage rejected write of {key}");
        }
    }

    fn remove_item(&self, key: &str) {
        let Some(storage) = self.storage() else {
            tracing::warn!("localStorage unavailable, cannot remove {key}");
            return;
        };
        if storage.remove_item(key).is_err() {
            tracing::warn!("localStorage rejected removal of {key}");
        }
    }
}
