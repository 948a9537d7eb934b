//! # In-memory holder for the user's saved links
//!
//! [`Collection`] mirrors the last successful `GET /saved` response and is then
//! patched locally with the server's answer to every create, update and delete.
//! The deduplicated tag list used by the filter UI is recomputed after each
//! mutation, so it never lists a tag no item carries.

use std::collections::HashSet;

use crate::filter::ContentFilter;
use crate::models::SavedContent;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Collection {
    items: Vec<SavedContent>,
    tags: Vec<String>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<SavedContent>) -> Self {
        let mut collection = Self::new();
        collection.replace_all(items);
        collection
    }

    /// Adopt a fresh listing from the server.
    pub fn replace_all(&mut self, items: Vec<SavedContent>) {
        self.items = items;
        self.refresh_tags();
    }

    /// Insert a newly saved item at the front.
    pub fn prepend(&mut self, item: SavedContent) {
        self.items.insert(0, item);
        self.refresh_tags();
    }

    /// Drop the item with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed {
            self.refresh_tags();
        }
        removed
    }

    /// Swap in the updated version of an item, keeping its position.
    /// Returns false when no item has that id.
    pub fn replace(&mut self, updated: SavedContent) -> bool {
        match self.items.iter_mut().find(|item| item.id == updated.id) {
            Some(slot) => {
                *slot = updated;
                self.refresh_tags();
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.tags.clear();
    }

    pub fn items(&self) -> &[SavedContent] {
        &self.items
    }

    /// Unique tags across all items, in first-seen order.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn get(&self, id: &str) -> Option<&SavedContent> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items passing `filter`, in list order.
    pub fn filtered(&self, filter: &ContentFilter) -> Vec<&SavedContent> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }

    fn refresh_tags(&mut self) {
        self.tags = unique_tags(&self.items);
    }
}

/// Collect every tag across `items` once, keeping the order they first appear.
pub fn unique_tags(items: &[SavedContent]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .flat_map(|item| item.tags.iter())
        .filter(|tag| seen.insert(*tag))
        .cloned()
        .collect()
}
