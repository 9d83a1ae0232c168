//! Name lookup library: content objects registered under `(category, id)`.

#[cfg(test)]
#[path = "library_test.rs"]
mod library_test;

use std::collections::HashMap;

use crate::content::{Content, LibraryKey};

/// Resolves library references at add-time.
pub trait Lookup {
    /// Return the content registered under `(category, id)`, if any.
    fn lookup(&self, category: &str, id: &str) -> Option<&Content>;

    /// Resolve a parsed key.
    fn resolve(&self, key: &LibraryKey) -> Option<&Content> {
        self.lookup(&key.category, &key.id)
    }
}

/// Two-level map from category to id to content.
#[derive(Debug, Clone, Default)]
pub struct Library {
    categories: HashMap<String, HashMap<String, Content>>,
}

impl Library {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `content` under `(category, id)`, replacing any previous entry.
    pub fn add(&mut self, category: impl Into<String>, id: impl Into<String>, content: Content) {
        self.categories
            .entry(category.into())
            .or_default()
            .insert(id.into(), content);
    }

    /// Return the content registered under `(category, id)`.
    #[must_use]
    pub fn get(&self, category: &str, id: &str) -> Option<&Content> {
        self.categories.get(category)?.get(id)
    }

    /// Remove an entry, returning it if it was present.
    pub fn remove(&mut self, category: &str, id: &str) -> Option<Content> {
        self.categories.get_mut(category)?.remove(id)
    }

    /// Total number of entries across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.values().map(HashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Lookup for Library {
    fn lookup(&self, category: &str, id: &str) -> Option<&Content> {
        self.get(category, id)
    }
}

impl From<HashMap<String, HashMap<String, Content>>> for Library {
    fn from(categories: HashMap<String, HashMap<String, Content>>) -> Self {
        Self { categories }
    }
}
