//! # `localStorage` token store: browser-side persistence
//!
//! [`LocalStorageTokenStore`] is the [`TokenStore`] used on the web platform. It
//! reads and writes a single string entry in `window.localStorage`.
//!
//! Every call looks the storage object up again rather than caching it, since
//! `web_sys::Storage` is not `Send` and the lookup is cheap. When storage is
//! unavailable (private mode, disabled cookies) all operations degrade to
//! "no token".

use crate::token::TokenStore;

#[derive(Clone, Debug)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(&self.key).ok()?
    }

    fn save(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(&self.key, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}
