//! Search and tag filtering for the collection view.

use crate::models::SavedContent;

/// Current search query plus the set of tags the user narrowed down to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentFilter {
    pub query: String,
    pub selected_tags: Vec<String>,
}

impl ContentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// An item passes when it carries any selected tag (or none are selected)
    /// and the query is a case-insensitive substring of its comment, URL or one
    /// of its tags (or the query is empty).
    pub fn matches(&self, item: &SavedContent) -> bool {
        self.matches_tags(item) && self.matches_query(item)
    }

    fn matches_tags(&self, item: &SavedContent) -> bool {
        self.selected_tags.is_empty() || self.selected_tags.iter().any(|tag| item.has_tag(tag))
    }

    fn matches_query(&self, item: &SavedContent) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        let hit = |s: &str| s.to_lowercase().contains(&needle);

        item.comment.as_deref().is_some_and(hit)
            || hit(item.url.as_str())
            || item.tags.iter().any(|tag| hit(tag.as_str()))
    }

    /// Select `tag` if it is not selected yet, otherwise deselect it.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(pos) = self.selected_tags.iter().position(|t| t == tag) {
            self.selected_tags.remove(pos);
        } else {
            self.selected_tags.push(tag.to_string());
        }
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected_tags.iter().any(|t| t == tag)
    }

    pub fn clear_tags(&mut self) {
        self.selected_tags.clear();
    }

    /// Drop selected tags that are no longer in `available`.
    /// Returns whether anything was removed.
    pub fn retain_tags(&mut self, available: &[String]) -> bool {
        let before = self.selected_tags.len();
        self.selected_tags.retain(|tag| available.contains(tag));
        self.selected_tags.len() != before
    }

    /// Whether any criterion is narrowing the list.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || !self.selected_tags.is_empty()
    }
}
