//! Authentication context and hooks for the UI.

use api::ApiClient;
use dioxus::prelude::*;
use store::{ClientConfig, Session};

use crate::client::{make_token_store, use_client, ClientContext};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Session,
    /// True until the persisted token has been checked at startup.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: Session::signed_out(),
            loading: true,
        }
    }
}

impl AuthState {
    pub fn settled(session: Session) -> Self {
        Self {
            session,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
///
/// Builds the API client from `config`; a malformed base URL renders an error
/// instead of the app.
#[component]
pub fn AuthProvider(config: ClientConfig, children: Element) -> Element {
    let client = use_hook(|| ApiClient::new(&config.api.base_url).map_err(|e| e.to_string()));

    match client {
        Ok(client) => rsx! {
            SessionProvider {
                client: client,
                token_key: config.session.token_key.clone(),
                {children}
            }
        },
        Err(message) => {
            tracing::error!("Cannot start client: {}", message);
            rsx! {
                div {
                    class: "screen-center",
                    p { class: "form-error", "Invalid API configuration: {message}" }
                }
            }
        }
    }
}

#[component]
fn SessionProvider(client: ApiClient, token_key: String, children: Element) -> Element {
    let ctx = use_context_provider(|| ClientContext::new(client, make_token_store(&token_key)));
    let mut auth_state = use_context_provider(|| Signal::new(AuthState::default()));

    // Restore the persisted session on mount
    let _ = use_resource(move || {
        let ctx = ctx.clone();
        async move {
            let session = api::session::restore(&ctx.client, ctx.tokens()).await;
            auth_state.set(AuthState::settled(session));
        }
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
///
/// Logout is local: the persisted token is removed and the session cleared.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let ctx: ClientContext = use_client();

    let onclick = move |_| {
        let session = api::session::logout(ctx.tokens());
        auth_state.set(AuthState::settled(session));
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
