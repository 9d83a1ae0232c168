//! Canvas roots and the registry that owns one canvas per drawing surface.
//!
//! A [`Canvas`] anchors all percentage math: its pixel extent is the parent
//! size of its default viewport. The host attaches each drawing surface to a
//! [`CanvasRegistry`] and keeps the returned [`SurfaceId`]; the canvas lives
//! until the surface is detached.

#[cfg(test)]
#[path = "canvas_test.rs"]
mod canvas_test;

use std::collections::HashMap;

use uuid::Uuid;

use crate::content::ContentRef;
use crate::error::LayoutError;
use crate::geom::PxSize;
use crate::library::Library;
use crate::viewport::{Viewport, ViewportLayout};

/// Stable handle for a host drawing surface.
pub type SurfaceId = Uuid;

/// Root container bound to a drawing surface of a known pixel size.
#[derive(Debug, Clone)]
pub struct Canvas {
    size: PxSize,
    viewport: Viewport,
    library: Library,
}

impl Canvas {
    /// Create a canvas with a default viewport covering the whole surface.
    #[must_use]
    pub fn new(width: i64, height: i64) -> Self {
        Self { size: PxSize::new(width, height), viewport: Viewport::full(), library: Library::new() }
    }

    #[must_use]
    pub fn width(&self) -> i64 {
        self.size.width
    }

    #[must_use]
    pub fn height(&self) -> i64 {
        self.size.height
    }

    #[must_use]
    pub fn size(&self) -> PxSize {
        self.size
    }

    /// Update the surface extent after the host resizes it.
    pub fn set_size(&mut self, width: i64, height: i64) {
        self.size = PxSize::new(width, height);
    }

    /// The default viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    #[must_use]
    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn library_mut(&mut self) -> &mut Library {
        &mut self.library
    }

    /// Add content to the default viewport, resolving references through this
    /// canvas's library. Returns how many drawings were admitted.
    pub fn add(&mut self, item: impl Into<ContentRef>) -> usize {
        self.viewport.add(item, &self.library)
    }

    /// Resolve the default viewport and its drawings against the surface.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Unresolved`] when the default viewport's frame
    /// cannot be resolved.
    pub fn layout(&self) -> Result<ViewportLayout, LayoutError> {
        self.viewport.layout(self.size)
    }
}

/// Owns one [`Canvas`] per attached surface.
#[derive(Debug, Default)]
pub struct CanvasRegistry {
    canvases: HashMap<SurfaceId, Canvas>,
}

impl CanvasRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a canvas for a new surface and return its handle.
    pub fn attach(&mut self, width: i64, height: i64) -> SurfaceId {
        let id = Uuid::new_v4();
        self.canvases.insert(id, Canvas::new(width, height));
        tracing::debug!(%id, width, height, "surface attached");
        id
    }

    /// Return the canvas for `id`, creating it with the given extent if the
    /// surface has not been seen before. An existing canvas keeps its size.
    pub fn load(&mut self, id: SurfaceId, width: i64, height: i64) -> &mut Canvas {
        self.canvases.entry(id).or_insert_with(|| {
            tracing::debug!(%id, width, height, "surface loaded");
            Canvas::new(width, height)
        })
    }

    /// Run `f` against the canvas for `id`. Returns `None` when the surface is
    /// not attached.
    pub fn exec<R>(&mut self, id: SurfaceId, f: impl FnOnce(&mut Canvas) -> R) -> Option<R> {
        self.canvases.get_mut(&id).map(f)
    }

    #[must_use]
    pub fn get(&self, id: SurfaceId) -> Option<&Canvas> {
        self.canvases.get(&id)
    }

    pub fn get_mut(&mut self, id: SurfaceId) -> Option<&mut Canvas> {
        self.canvases.get_mut(&id)
    }

    /// Drop the canvas for a surface that is going away.
    pub fn detach(&mut self, id: SurfaceId) -> Option<Canvas> {
        let removed = self.canvases.remove(&id);
        if removed.is_some() {
            tracing::debug!(%id, "surface detached");
        }
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.canvases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.canvases.is_empty()
    }
}
