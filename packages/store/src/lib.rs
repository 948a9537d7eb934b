pub mod collection;
pub mod config;
pub mod draft;
pub mod filter;
pub mod models;
pub mod session;
pub mod token;

#[cfg(not(target_arch = "wasm32"))]
mod file_token;
#[cfg(not(target_arch = "wasm32"))]
pub use file_token::FileTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageTokenStore;

pub use collection::{unique_tags, Collection};
pub use config::ClientConfig;
pub use draft::{is_valid_url, ContentDraft, DraftError};
pub use filter::ContentFilter;
pub use models::{ContentPatch, NewContent, SavedContent, UserInfo};
pub use session::Session;
pub use token::{MemoryTokenStore, TokenStore, DEFAULT_TOKEN_KEY};
