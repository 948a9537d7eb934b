//! # Session flows: API calls combined with token persistence
//!
//! These functions are the only place that writes to a [`TokenStore`]:
//!
//! - [`restore`] runs once at startup. A stored token is checked with
//!   `/auth/verify`; if the check fails for any reason the token is discarded.
//! - [`login`] / [`register`] persist the token returned by the server.
//! - [`logout`] forgets the token locally. There is no server-side logout.

use store::{Session, TokenStore};

use crate::client::ApiClient;
use crate::error::ApiError;

/// Rebuild the session from a previously persisted token.
///
/// Never fails: an absent, rejected or unverifiable token yields a signed-out
/// session (and the stored token is removed).
pub async fn restore<T: TokenStore + ?Sized>(client: &ApiClient, tokens: &T) -> Session {
    let Some(token) = tokens.load() else {
        return Session::signed_out();
    };

    match client.verify(&token).await {
        Ok(user) => {
            tracing::info!("Restored session for {}", user.username);
            Session::signed_in(user, token)
        }
        Err(e) => {
            tracing::warn!("Stored session could not be verified: {}", e);
            tokens.clear();
            Session::signed_out()
        }
    }
}

/// Sign in with email and password, persisting the returned token.
pub async fn login<T: TokenStore + ?Sized>(
    client: &ApiClient,
    tokens: &T,
    email: &str,
    password: &str,
) -> Result<Session, ApiError> {
    let auth = client.login(email.trim(), password).await?;
    tokens.save(&auth.token);
    tracing::info!("Signed in as {}", auth.user.username);
    Ok(Session::signed_in(auth.user, auth.token))
}

/// Create an account, persisting the returned token.
pub async fn register<T: TokenStore + ?Sized>(
    client: &ApiClient,
    tokens: &T,
    username: &str,
    email: &str,
    password: &str,
) -> Result<Session, ApiError> {
    let auth = client
        .register(username.trim(), email.trim(), password)
        .await?;
    tokens.save(&auth.token);
    tracing::info!("Registered account {}", auth.user.username);
    Ok(Session::signed_in(auth.user, auth.token))
}

/// Forget the persisted token.
pub fn logout<T: TokenStore + ?Sized>(tokens: &T) -> Session {
    tokens.clear();
    tracing::info!("Signed out");
    Session::signed_out()
}
