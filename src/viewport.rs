//! Viewports: a coordinate frame holding an ordered list of drawings.
//!
//! A viewport's own position and size resolve against its parent (the canvas
//! for the default viewport). Its drawings then resolve against the viewport's
//! resolved size and are offset by its origin, so the frames produced by
//! [`Viewport::layout`] are in surface pixels.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde_json::json;

use crate::content::{Content, ContentRef, LibraryKey};
use crate::error::LayoutError;
use crate::geom::{PxRect, PxSize};
use crate::library::Lookup;
use crate::pair::{Position, Size};

/// A coordinate frame and the drawings placed in it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Viewport {
    pub position: Position,
    pub size: Size,
    content: Vec<Content>,
}

/// A drawing's resolved frame, or why it could not be placed.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemLayout {
    pub id: String,
    pub frame: Result<PxRect, LayoutError>,
}

/// Result of [`Viewport::layout`].
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportLayout {
    pub frame: PxRect,
    pub items: Vec<ItemLayout>,
}

impl Viewport {
    #[must_use]
    pub fn new(position: Position, size: Size) -> Self {
        Self { position, size, content: Vec::new() }
    }

    /// A viewport at the parent's origin covering 100% of it.
    #[must_use]
    pub fn full() -> Self {
        Self::new(
            Position::parse(Some(&json!(0)), Some(&json!(0))),
            Size::parse(Some(&json!("100%")), Some(&json!("100%"))),
        )
    }

    /// Admitted drawings in insertion order.
    #[must_use]
    pub fn content(&self) -> &[Content] {
        &self.content
    }

    /// Add content, returning how many drawings were admitted.
    ///
    /// Sequences are added element by element. Named references resolve
    /// through `library` now; a miss is dropped for good. Anything whose
    /// `type` is not `"drawing"` is ignored.
    pub fn add<L>(&mut self, item: impl Into<ContentRef>, library: &L) -> usize
    where
        L: Lookup + ?Sized,
    {
        match item.into() {
            ContentRef::Object(content) => self.admit(content),
            ContentRef::Many(items) => items.into_iter().map(|item| self.add(item, library)).sum(),
            ContentRef::Named(reference) => {
                let Some(key) = LibraryKey::parse(&reference) else {
                    tracing::debug!(%reference, "malformed content reference");
                    return 0;
                };
                match library.resolve(&key) {
                    Some(content) => self.admit(content.clone()),
                    None => {
                        tracing::debug!(category = %key.category, id = %key.id, "content reference not found");
                        0
                    }
                }
            }
            ContentRef::Invalid => {
                tracing::debug!("ignoring content value that is not an object, array or reference");
                0
            }
        }
    }

    /// Remove all drawings.
    pub fn clear(&mut self) {
        self.content.clear();
    }

    /// Resolve this viewport's frame against its parent's extent.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Unresolved`] for the first axis that has no
    /// usable value.
    pub fn frame(&self, parent: PxSize) -> Result<PxRect, LayoutError> {
        frame_of(&self.position, &self.size, parent)
    }

    /// Resolve this viewport and every drawing in it.
    ///
    /// Drawing frames are in the parent's pixel space. A drawing that cannot
    /// be placed (an unresolved axis, or a coordinate pushed past `i64` by the
    /// viewport origin) carries its own error and does not affect the others.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Unresolved`] when the viewport's own frame
    /// cannot be resolved.
    pub fn layout(&self, parent: PxSize) -> Result<ViewportLayout, LayoutError> {
        let frame = self.frame(parent)?;
        let origin = frame.origin();
        let items = self
            .content
            .iter()
            .map(|item| ItemLayout {
                id: item.id().to_owned(),
                frame: frame_of(&item.position(), &item.size(), frame.size())
                    .and_then(|rect| Ok(PxRect::from_parts(rect.origin().offset_by(origin)?, rect.size()))),
            })
            .collect();
        Ok(ViewportLayout { frame, items })
    }

    fn admit(&mut self, content: Content) -> usize {
        if !content.is_drawing() {
            tracing::debug!(kind = ?content.kind(), "dropping non-drawing content");
            return 0;
        }
        tracing::trace!(id = content.id(), index = self.content.len(), "drawing admitted");
        self.content.push(content);
        1
    }
}

fn frame_of(position: &Position, size: &Size, parent: PxSize) -> Result<PxRect, LayoutError> {
    let origin = position.to_px(parent).point()?;
    let size = size.to_px(parent).size()?;
    Ok(PxRect::from_parts(origin, size))
}
