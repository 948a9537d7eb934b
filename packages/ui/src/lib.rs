//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

pub mod views;

pub const LINKVAULT_CSS: Asset = asset!("/assets/styling/linkvault.css");

mod client;
pub use client::{make_token_store, use_client, ClientContext};

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod saved_content;
pub use saved_content::{
    use_saved_content, SavedContentHandle, SavedContentProvider, SavedContentState,
};

mod navbar;
pub use navbar::Navbar;

mod auth_form;
pub use auth_form::AuthForm;

mod content_card;
pub use content_card::ContentCard;

mod tag_filter;
pub use tag_filter::{use_tag_filter, TagFilter};

mod content_form;
pub use content_form::ContentForm;

#[cfg(test)]
mod test_support;
