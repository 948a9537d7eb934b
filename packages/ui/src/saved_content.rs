//! Shared state for the signed-in user's saved links.
//!
//! [`SavedContentProvider`] owns a single `Signal<SavedContentState>` for the
//! whole dashboard, so the add/edit modal and the card grid always look at the
//! same list. The list belongs to the token it was fetched with: when the
//! session token changes it is emptied before the new fetch starts, and it is
//! cleared when there is no token.
//!
//! Mutations go to the server first; the local [`Collection`] is only patched
//! with the server's response after a 2xx, and only while the token that made
//! the call still owns the list. A failed call leaves the list as it was and
//! hands the error back to the caller.

use api::ApiError;
use dioxus::prelude::*;
use store::{Collection, ContentPatch, NewContent};

use crate::auth::{use_auth, AuthState};
use crate::client::{use_client, ClientContext};

#[derive(Clone, Debug, PartialEq)]
pub struct SavedContentState {
    pub collection: Collection,
    pub loading: bool,
    /// Token the collection was fetched with.
    pub owner: Option<String>,
}

impl Default for SavedContentState {
    fn default() -> Self {
        Self {
            collection: Collection::new(),
            loading: true,
            owner: None,
        }
    }
}

impl SavedContentState {
    fn signed_out() -> Self {
        Self {
            loading: false,
            ..Self::default()
        }
    }

    /// Empty list owned by `token`, waiting for its first response.
    fn pending(token: &str) -> Self {
        Self {
            owner: Some(token.to_string()),
            ..Self::default()
        }
    }

    pub fn is_owned_by(&self, token: &str) -> bool {
        self.owner.as_deref() == Some(token)
    }
}

/// Provides the saved-content state to its children and keeps it in sync with
/// the current session token.
#[component]
pub fn SavedContentProvider(children: Element) -> Element {
    let auth = use_auth();
    let ctx = use_client();
    let mut state = use_context_provider(|| Signal::new(SavedContentState::default()));
    let token = use_memo(move || auth.read().session.token.clone());

    let _loader = use_resource(move || {
        let ctx = ctx.clone();
        async move {
            let Some(requested) = token() else {
                state.set(SavedContentState::signed_out());
                return;
            };

            if state.peek().is_owned_by(&requested) {
                state.write().loading = true;
            } else {
                state.set(SavedContentState::pending(&requested));
            }
            let result = ctx.client.list_saved(&requested).await;

            // A newer token may have taken over while this request was in flight.
            if token.peek().as_deref() != Some(requested.as_str()) {
                return;
            }
            match result {
                Ok(items) => {
                    tracing::info!("Loaded {} saved items", items.len());
                    state.set(SavedContentState {
                        collection: Collection::from_items(items),
                        loading: false,
                        owner: Some(requested),
                    });
                }
                Err(e) => {
                    tracing::error!("Error fetching content: {}", e);
                    state.write().loading = false;
                }
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Access the saved-content state and its mutations.
pub fn use_saved_content() -> SavedContentHandle {
    SavedContentHandle {
        state: use_context::<Signal<SavedContentState>>(),
        auth: use_auth(),
        ctx: use_client(),
    }
}

#[derive(Clone)]
pub struct SavedContentHandle {
    state: Signal<SavedContentState>,
    auth: Signal<AuthState>,
    ctx: ClientContext,
}

impl SavedContentHandle {
    /// Current state; subscribes the calling component to changes.
    ///
    /// A list still owned by a previous session is never returned: until the
    /// current token's fetch lands this reports an empty list.
    pub fn state(&self) -> SavedContentState {
        let token = self.auth.read().session.token.clone();
        let state = self.state.read();
        if state.owner == token {
            return (*state).clone();
        }
        SavedContentState {
            collection: Collection::new(),
            loading: token.is_some(),
            owner: token,
        }
    }

    fn token(&self) -> Option<String> {
        self.auth.peek().session.token.clone()
    }

    /// Run `apply` on the list if `token` is still the session token and still
    /// owns the list. Returns whether it ran.
    fn apply_for(&self, token: &str, apply: impl FnOnce(&mut Collection)) -> bool {
        let current = self.token();
        if current.as_deref() != Some(token) || !self.state.peek().is_owned_by(token) {
            tracing::debug!("Session changed during request; result not applied");
            return false;
        }
        let mut state = self.state;
        apply(&mut state.write().collection);
        true
    }

    /// Save a new link and put the server's copy at the front of the list.
    pub async fn save(&self, content: NewContent) -> Result<(), ApiError> {
        let Some(token) = self.token() else {
            return Ok(());
        };
        let saved = self.ctx.client.create_saved(&token, &content).await?;
        tracing::info!("Saved {}", saved.url);
        self.apply_for(&token, |collection| collection.prepend(saved));
        Ok(())
    }

    /// Apply a partial update and replace the item with the server's copy.
    pub async fn update(&self, id: &str, patch: ContentPatch) -> Result<(), ApiError> {
        let Some(token) = self.token() else {
            return Ok(());
        };
        if patch.is_empty() {
            return Ok(());
        }
        let updated = self.ctx.client.update_saved(&token, id, &patch).await?;
        self.apply_for(&token, |collection| {
            if !collection.replace(updated) {
                tracing::warn!("Updated item {} is no longer in the list", id);
            }
        });
        Ok(())
    }

    /// Delete a link and drop it from the list.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let Some(token) = self.token() else {
            return Ok(());
        };
        self.ctx.client.delete_saved(&token, id).await?;
        self.apply_for(&token, |collection| {
            collection.remove(id);
        });
        Ok(())
    }

    /// Re-fetch the whole list for the current token.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let Some(token) = self.token() else {
            return Ok(());
        };
        let mut state = self.state;
        state.write().loading = true;
        let result = self.ctx.client.list_saved(&token).await;

        if self.token().as_deref() != Some(token.as_str()) {
            return result.map(|_| ());
        }
        match result {
            Ok(items) => {
                state.set(SavedContentState {
                    collection: Collection::from_items(items),
                    loading: false,
                    owner: Some(token),
                });
                Ok(())
            }
            Err(e) => {
                state.write().loading = false;
                Err(e)
            }
        }
    }
}
