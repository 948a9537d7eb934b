//! Shared API client and platform token store.
//!
//! [`ClientContext`] is provided once by [`crate::AuthProvider`] and consumed
//! with [`use_client`]. It holds a single [`store::TokenStore`] for the whole
//! app, created by [`make_token_store`]:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageTokenStore`]
//! - **Desktop** (native): a file under `<data_dir>/linkvault/`

use std::fmt;
use std::rc::Rc;

use api::ApiClient;
use dioxus::prelude::*;
use store::TokenStore;

/// API client plus the store the session token is persisted in.
#[derive(Clone)]
pub struct ClientContext {
    pub client: ApiClient,
    tokens: Rc<dyn TokenStore>,
}

impl ClientContext {
    pub fn new(client: ApiClient, tokens: impl TokenStore + 'static) -> Self {
        Self {
            client,
            tokens: Rc::new(tokens),
        }
    }

    /// The one token store shared by every session flow.
    pub fn tokens(&self) -> &dyn TokenStore {
        &*self.tokens
    }
}

impl fmt::Debug for ClientContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientContext")
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

/// Consume the [`ClientContext`] provided by `AuthProvider`.
pub fn use_client() -> ClientContext {
    use_context::<ClientContext>()
}

/// Create a platform-appropriate token store for `key`.
pub fn make_token_store(key: &str) -> impl TokenStore + 'static {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageTokenStore::new(key)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryTokenStore::with_key(key)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("linkvault");
        store::FileTokenStore::new(base, key)
    }
}
