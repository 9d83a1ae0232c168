//! Content objects and the references used to add them to a viewport.
//!
//! A content object is an open-ended JSON object. The only field the geometry
//! model requires is `type`; drawings may also carry an `id` plus `pos` and
//! `size` values in any of the pair forms accepted by [`crate::pair`].

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::consts::{DEFAULT_CATEGORY, DRAWING_TYPE};
use crate::pair::{Position, Size};

/// A content object as stored in a viewport or in the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Content {
    value: Value,
}

impl Content {
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// The `type` field, when it is a string.
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.value.get("type").and_then(Value::as_str)
    }

    /// Whether a viewport will admit this object.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.kind() == Some(DRAWING_TYPE)
    }

    /// The `id` field. Empty string when absent.
    #[must_use]
    pub fn id(&self) -> &str {
        self.value.get("id").and_then(Value::as_str).unwrap_or("")
    }

    /// Position parsed from the `pos` field. Unset when absent.
    #[must_use]
    pub fn position(&self) -> Position {
        self.value.get("pos").map(Position::from_value).unwrap_or_default()
    }

    /// Size parsed from the `size` field. Unset when absent.
    #[must_use]
    pub fn size(&self) -> Size {
        self.value.get("size").map(Size::from_value).unwrap_or_default()
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }
}

impl From<Value> for Content {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

/// A `(category, id)` key into the name lookup library.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LibraryKey {
    pub category: String,
    pub id: String,
}

impl LibraryKey {
    #[must_use]
    pub fn new(category: impl Into<String>, id: impl Into<String>) -> Self {
        Self { category: category.into(), id: id.into() }
    }

    /// Parse `"category#id"` or `"#id"` (category defaults to `"drawing"`).
    ///
    /// Returns `None` without a `#`, with more than one `#`, or with an empty id.
    #[must_use]
    pub fn parse(reference: &str) -> Option<Self> {
        let (category, id) = reference.trim().split_once('#')?;
        if id.is_empty() || id.contains('#') {
            return None;
        }
        let category = if category.is_empty() { DEFAULT_CATEGORY } else { category };
        Some(Self::new(category, id))
    }
}

/// Something that can be added to a viewport.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentRef {
    /// A content object used as-is.
    Object(Content),
    /// A sequence of references, added in order.
    Many(Vec<ContentRef>),
    /// A library reference, resolved when added.
    Named(String),
    /// A value that cannot name content.
    Invalid,
}

impl From<Value> for ContentRef {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(_) => Self::Object(Content::new(value)),
            Value::Array(items) => Self::Many(items.into_iter().map(Self::from).collect()),
            Value::String(reference) => Self::Named(reference),
            _ => Self::Invalid,
        }
    }
}

impl From<Content> for ContentRef {
    fn from(content: Content) -> Self {
        Self::Object(content)
    }
}

impl From<&str> for ContentRef {
    fn from(reference: &str) -> Self {
        Self::Named(reference.to_owned())
    }
}

impl From<Vec<ContentRef>> for ContentRef {
    fn from(items: Vec<ContentRef>) -> Self {
        Self::Many(items)
    }
}
