//! # API crate: REST client for the LinkVault backend
//!
//! Every frontend (web, desktop) talks to the server through this crate. The
//! server itself is external; this crate only knows its HTTP contract.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: one method per endpoint, bearer auth, status checking |
//! | [`session`] | Startup restore, login, register and logout on top of a [`store::TokenStore`] |
//! | [`models`] | Request/response envelopes (`{user, token}`, `{content: [...]}`) |
//! | [`error`] | [`ApiError`] |
//!
//! Domain types are re-exported from `store` so frontends can depend on `api`
//! alone for the wire-facing types.

pub mod client;
pub mod error;
pub mod models;
pub mod session;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{AuthResponse, ContentListResponse, VerifyResponse};

pub use store::{ContentPatch, NewContent, SavedContent, Session, UserInfo};
