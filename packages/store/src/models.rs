//! # Domain models for saved links and their owners
//!
//! These are the JSON shapes exchanged with the LinkVault REST API. Field names
//! are camelCase on the wire (`coverImage`, `createdAt`).
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserInfo`] | The authenticated account as returned by `/auth/*`. |
//! | [`SavedContent`] | A single saved link with its optional metadata and tags. |
//! | [`NewContent`] | Body of `POST /saved`; empty optional fields are omitted. |
//! | [`ContentPatch`] | Body of `PUT /saved/{id}`; only changed fields are sent. |

use serde::{Deserialize, Serialize};
use url::Url;

/// Maximum number of comment characters used when a comment stands in for a title.
const TITLE_COMMENT_CHARS: usize = 50;

/// Account information returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub email: String,
}

/// A link saved in the user's collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedContent {
    pub id: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    /// Set-like; insertion order is kept for display.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl SavedContent {
    /// Human-friendly heading for a card.
    ///
    /// Falls back from the explicit title, to the first 50 characters of the
    /// comment, to the URL host, and finally to `"Untitled"`.
    pub fn display_title(&self) -> String {
        if let Some(title) = non_empty(self.title.as_deref()) {
            return title.to_string();
        }
        if let Some(comment) = non_empty(self.comment.as_deref()) {
            let mut chars = comment.chars();
            let head: String = chars.by_ref().take(TITLE_COMMENT_CHARS).collect();
            return if chars.next().is_some() {
                format!("{head}...")
            } else {
                head
            };
        }
        match Url::parse(&self.url) {
            Ok(url) => url
                .host_str()
                .map(str::to_string)
                .unwrap_or_else(|| "Untitled".to_string()),
            Err(_) => "Untitled".to_string(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Fields sent when saving a new link.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContent {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Partial update for an existing link.
///
/// Outer `None` means "leave unchanged" and is not serialised. For the optional
/// text fields `Some(None)` clears the value and is sent as `null`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Option<String>>,
}

impl ContentPatch {
    pub fn is_empty(&self) -> bool {
        self.url.is_none()
            && self.comment.is_none()
            && self.cover_image.is_none()
            && self.tags.is_none()
            && self.title.is_none()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(url: &str) -> SavedContent {
        SavedContent {
            id: "1".to_string(),
            url: url.to_string(),
            comment: None,
            cover_image: None,
            tags: Vec::new(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
            title: None,
        }
    }

    #[test]
    fn test_display_title_prefers_title() {
        let mut content = item("https://example.com/a");
        content.title = Some("Rust book".to_string());
        content.comment = Some("a comment".to_string());
        assert_eq!(content.display_title(), "Rust book");
    }

    #[test]
    fn test_display_title_truncates_long_comment() {
        let mut content = item("https://example.com/a");
        content.comment = Some("x".repeat(60));
        let title = content.display_title();
        assert_eq!(title, format!("{}...", "x".repeat(50)));

        content.comment = Some("y".repeat(50));
        assert_eq!(content.display_title(), "y".repeat(50));
    }

    #[test]
    fn test_display_title_truncates_on_char_boundary() {
        let mut content = item("https://example.com");
        content.comment = Some("é".repeat(51));
        assert_eq!(content.display_title(), format!("{}...", "é".repeat(50)));
    }

    #[test]
    fn test_display_title_falls_back_to_host_then_untitled() {
        assert_eq!(item("https://docs.rs/serde").display_title(), "docs.rs");
        assert_eq!(item("not a url").display_title(), "Untitled");
    }

    #[test]
    fn test_saved_content_wire_format() {
        let json = r#"{
            "id": "abc",
            "url": "https://example.com",
            "coverImage": "https://example.com/cover.png",
            "tags": ["rust", "web"],
            "createdAt": "2024-05-01T10:00:00Z"
        }"#;
        let content: SavedContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.cover_image.as_deref(), Some("https://example.com/cover.png"));
        assert_eq!(content.tags, vec!["rust", "web"]);
        assert!(content.comment.is_none());
        assert!(content.title.is_none());
    }

    #[test]
    fn test_missing_tags_default_to_empty() {
        let json = r#"{"id": "a", "url": "https://example.com", "createdAt": "now"}"#;
        let content: SavedContent = serde_json::from_str(json).unwrap();
        assert!(content.tags.is_empty());
    }

    #[test]
    fn test_patch_serializes_only_changed_fields() {
        let patch = ContentPatch {
            comment: Some(None),
            tags: Some(vec!["a".to_string()]),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, serde_json::json!({ "comment": null, "tags": ["a"] }));
        assert!(ContentPatch::default().is_empty());
    }
}
