//! # Persisted bearer token
//!
//! The only client state that survives a restart is the session token, kept as
//! a single string under a fixed key. [`TokenStore`] abstracts where that string
//! lives so the session flows work the same in the browser (`localStorage`), on
//! desktop (a file under the data directory) and in tests (memory).
//!
//! Implementations swallow storage errors: a store that cannot be read behaves
//! as if no token was saved, and a failed write leaves the user signed in for
//! the current run only.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Default key the token is stored under.
pub const DEFAULT_TOKEN_KEY: &str = "token";

pub trait TokenStore {
    /// The stored token, if any.
    fn load(&self) -> Option<String>;

    fn save(&self, token: &str);

    fn clear(&self);
}

/// In-memory TokenStore for tests and platforms without persistence.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    key: String,
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::with_key(DEFAULT_TOKEN_KEY)
    }

    pub fn with_key(key: &str) -> Self {
        Self {
            key: key.to_string(),
            entries: Arc::default(),
        }
    }

    /// A store that already holds `token`, as if saved by a previous run.
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.save(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.entries.lock().ok()?.get(&self.key).cloned()
    }

    fn save(&self, token: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(self.key.clone(), token.to_string());
        }
    }

    fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(&self.key);
        }
    }
}
