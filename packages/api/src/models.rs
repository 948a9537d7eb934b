//! Request and response envelopes for the REST endpoints.
//!
//! The domain types themselves ([`UserInfo`], [`SavedContent`], ...) live in the
//! `store` crate; this module only wraps them the way the server does.

use serde::{Deserialize, Serialize};
use store::{SavedContent, UserInfo};

#[derive(Debug, Clone, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of a successful `/auth/login` or `/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub user: UserInfo,
    pub token: String,
}

/// Body of a successful `/auth/verify`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerifyResponse {
    pub user: UserInfo,
}

/// Body of `GET /saved`. A missing or `null` list means no items.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContentListResponse {
    #[serde(default)]
    pub content: Option<Vec<SavedContent>>,
}

impl ContentListResponse {
    pub fn into_items(self) -> Vec<SavedContent> {
        self.content.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_list_tolerates_missing_and_null() {
        let empty: ContentListResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.into_items().is_empty());

        let null: ContentListResponse = serde_json::from_str(r#"{"content": null}"#).unwrap();
        assert!(null.into_items().is_empty());
    }

    #[test]
    fn test_register_request_shape() {
        let body = RegisterRequest {
            username: "ada",
            email: "ada@example.com",
            password: "hunter22",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "username": "ada",
                "email": "ada@example.com",
                "password": "hunter22"
            })
        );
    }
}
