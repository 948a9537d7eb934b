//! # REST client for the LinkVault API
//!
//! [`ApiClient`] wraps a [`reqwest::Client`] and a base URL. Paths are appended
//! as URL segments, so a base with a path prefix (`https://host/api`) works as
//! well as a bare origin.
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | [`login`](ApiClient::login) | `POST /auth/login` |
//! | [`register`](ApiClient::register) | `POST /auth/register` |
//! | [`verify`](ApiClient::verify) | `GET /auth/verify` |
//! | [`list_saved`](ApiClient::list_saved) | `GET /saved` |
//! | [`create_saved`](ApiClient::create_saved) | `POST /saved` |
//! | [`update_saved`](ApiClient::update_saved) | `PUT /saved/{id}` |
//! | [`delete_saved`](ApiClient::delete_saved) | `DELETE /saved/{id}` |
//!
//! Authenticated calls take the token explicitly and send it as
//! `Authorization: Bearer <token>`. Any non-2xx status becomes
//! [`ApiError::Status`]; nothing is retried.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use store::{ContentPatch, NewContent, SavedContent, UserInfo};
use url::Url;

use crate::error::ApiError;
use crate::models::{AuthResponse, ContentListResponse, LoginRequest, RegisterRequest, VerifyResponse};

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url.trim()).map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(format!(
                "{base_url} cannot be used as a base"
            )));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// `POST /auth/login`
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let request = self
            .http
            .post(self.endpoint(&["auth", "login"]))
            .json(&LoginRequest { email, password });
        self.send_json(request).await
    }

    /// `POST /auth/register`
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        let request = self
            .http
            .post(self.endpoint(&["auth", "register"]))
            .json(&RegisterRequest {
                username,
                email,
                password,
            });
        self.send_json(request).await
    }

    /// `GET /auth/verify`: resolve a stored token to its user.
    pub async fn verify(&self, token: &str) -> Result<UserInfo, ApiError> {
        let request = self
            .http
            .get(self.endpoint(&["auth", "verify"]))
            .bearer_auth(token);
        let body: VerifyResponse = self.send_json(request).await?;
        Ok(body.user)
    }

    /// `GET /saved`
    pub async fn list_saved(&self, token: &str) -> Result<Vec<SavedContent>, ApiError> {
        let request = self.http.get(self.endpoint(&["saved"])).bearer_auth(token);
        let body: ContentListResponse = self.send_json(request).await?;
        Ok(body.into_items())
    }

    /// `POST /saved`
    pub async fn create_saved(
        &self,
        token: &str,
        content: &NewContent,
    ) -> Result<SavedContent, ApiError> {
        let request = self
            .http
            .post(self.endpoint(&["saved"]))
            .bearer_auth(token)
            .json(content);
        self.send_json(request).await
    }

    /// `PUT /saved/{id}`
    pub async fn update_saved(
        &self,
        token: &str,
        id: &str,
        patch: &ContentPatch,
    ) -> Result<SavedContent, ApiError> {
        let request = self
            .http
            .put(self.endpoint(&["saved", id]))
            .bearer_auth(token)
            .json(patch);
        self.send_json(request).await
    }

    /// `DELETE /saved/{id}`
    pub async fn delete_saved(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let request = self
            .http
            .delete(self.endpoint(&["saved", id]))
            .bearer_auth(token);
        self.send(request).await?;
        Ok(())
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("{} {}", status.as_u16(), response.url().path());

        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::warn!("API request failed with status {}", status.as_u16());
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_segments() {
        let client = ApiClient::new("http://localhost:8080").unwrap();
        assert_eq!(
            client.endpoint(&["auth", "login"]).as_str(),
            "http://localhost:8080/auth/login"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let client = ApiClient::new("https://example.org/api/").unwrap();
        assert_eq!(
            client.endpoint(&["saved", "42"]).as_str(),
            "https://example.org/api/saved/42"
        );

        let client = ApiClient::new("https://example.org/api").unwrap();
        assert_eq!(
            client.endpoint(&["saved"]).as_str(),
            "https://example.org/api/saved"
        );
    }

    #[test]
    fn test_endpoint_escapes_ids() {
        let client = ApiClient::new("http://localhost:8080").unwrap();
        assert_eq!(
            client.endpoint(&["saved", "a/b c"]).as_str(),
            "http://localhost:8080/saved/a%2Fb%20c"
        );
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            ApiClient::new("mailto:someone@example.com"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }
}
