//! # Editable form state for adding and editing links
//!
//! [`ContentDraft`] holds the raw strings typed into the add/edit modal. It is
//! turned into a request body only through [`ContentDraft::validate`] or
//! [`ContentDraft::patch_against`], both of which reject malformed URLs before
//! anything reaches the network.

use thiserror::Error;
use url::Url;

use crate::models::{ContentPatch, NewContent, SavedContent};

/// Client-side validation failures. The messages are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Please enter a valid URL")]
    InvalidUrl,
    #[error("Please enter a valid cover image URL")]
    InvalidCoverImage,
}

/// Whether `value` parses as an absolute URL.
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value.trim()).is_ok()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentDraft {
    pub url: String,
    pub comment: String,
    pub cover_image: String,
    pub title: String,
    pub tags: Vec<String>,
}

impl ContentDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill a draft from an existing item for the edit modal.
    pub fn from_content(content: &SavedContent) -> Self {
        Self {
            url: content.url.clone(),
            comment: content.comment.clone().unwrap_or_default(),
            cover_image: content.cover_image.clone().unwrap_or_default(),
            title: content.title.clone().unwrap_or_default(),
            tags: content.tags.clone(),
        }
    }

    /// Add a trimmed tag. Empty and already-present tags are ignored.
    /// Returns whether the tag list changed.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.has_tag(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    fn check_urls(&self) -> Result<(), DraftError> {
        if !is_valid_url(&self.url) {
            return Err(DraftError::InvalidUrl);
        }
        if !self.cover_image.trim().is_empty() && !is_valid_url(&self.cover_image) {
            return Err(DraftError::InvalidCoverImage);
        }
        Ok(())
    }

    /// Validate and build the body for `POST /saved`.
    pub fn validate(&self) -> Result<NewContent, DraftError> {
        self.check_urls()?;
        Ok(NewContent {
            url: self.url.trim().to_string(),
            comment: optional(&self.comment),
            cover_image: optional(&self.cover_image),
            tags: self.tags.clone(),
            title: optional(&self.title),
        })
    }

    /// Validate and build a `PUT /saved/{id}` body containing only the fields
    /// that differ from `original`.
    pub fn patch_against(&self, original: &SavedContent) -> Result<ContentPatch, DraftError> {
        self.check_urls()?;

        let url = self.url.trim();
        let mut patch = ContentPatch::default();
        if url != original.url {
            patch.url = Some(url.to_string());
        }
        patch.comment = changed(&self.comment, &original.comment);
        patch.cover_image = changed(&self.cover_image, &original.cover_image);
        patch.title = changed(&self.title, &original.title);
        if self.tags != original.tags {
            patch.tags = Some(self.tags.clone());
        }
        Ok(patch)
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn changed(draft: &str, original: &Option<String>) -> Option<Option<String>> {
    let next = optional(draft);
    let current = original.as_deref().and_then(optional);
    (next != current).then_some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved() -> SavedContent {
        SavedContent {
            id: "42".to_string(),
            url: "https://example.com".to_string(),
            comment: Some("old".to_string()),
            cover_image: None,
            tags: vec!["rust".to_string()],
            created_at: "2024-01-01".to_string(),
            title: None,
        }
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let draft = ContentDraft {
            url: "example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.validate(), Err(DraftError::InvalidUrl));
        assert_eq!(
            DraftError::InvalidUrl.to_string(),
            "Please enter a valid URL"
        );
    }

    #[test]
    fn test_invalid_cover_image_is_rejected_only_when_present() {
        let mut draft = ContentDraft {
            url: "https://example.com".to_string(),
            cover_image: "nope".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.validate(), Err(DraftError::InvalidCoverImage));

        draft.cover_image = "   ".to_string();
        let content = draft.validate().unwrap();
        assert!(content.cover_image.is_none());
    }

    #[test]
    fn test_validate_trims_and_drops_empty_fields() {
        let mut draft = ContentDraft {
            url: "  https://example.com/post  ".to_string(),
            comment: "  nice read ".to_string(),
            ..Default::default()
        };
        draft.add_tag("rust");

        let content = draft.validate().unwrap();
        assert_eq!(content.url, "https://example.com/post");
        assert_eq!(content.comment.as_deref(), Some("nice read"));
        assert!(content.title.is_none());
        assert_eq!(content.tags, vec!["rust"]);
    }

    #[test]
    fn test_add_tag_trims_and_deduplicates() {
        let mut draft = ContentDraft::new();
        assert!(draft.add_tag("  rust "));
        assert!(!draft.add_tag("rust"));
        assert!(!draft.add_tag("   "));
        assert!(draft.add_tag("web"));
        assert_eq!(draft.tags, vec!["rust", "web"]);

        draft.remove_tag("rust");
        assert_eq!(draft.tags, vec!["web"]);
        assert!(!draft.has_tag("rust"));
    }

    #[test]
    fn test_patch_contains_only_changes() {
        let original = saved();
        let mut draft = ContentDraft::from_content(&original);
        assert!(draft.patch_against(&original).unwrap().is_empty());

        draft.comment.clear();
        draft.add_tag("web");
        draft.title = "A title".to_string();
        let patch = draft.patch_against(&original).unwrap();

        assert_eq!(patch.url, None);
        assert_eq!(patch.comment, Some(None));
        assert_eq!(patch.cover_image, None);
        assert_eq!(patch.title, Some(Some("A title".to_string())));
        assert_eq!(patch.tags, Some(vec!["rust".to_string(), "web".to_string()]));
    }

    #[test]
    fn test_patch_rejects_invalid_url() {
        let original = saved();
        let mut draft = ContentDraft::from_content(&original);
        draft.url = "::bad::".to_string();
        assert_eq!(draft.patch_against(&original), Err(DraftError::InvalidUrl));
    }
}
