//! Scene documents: a JSON description of one canvas, its library and content.
//!
//! ```json
//! {
//!   "width": 800,
//!   "height": 600,
//!   "library": { "drawing": { "logo": { "type": "drawing", "pos": "0 0", "size": "1in 1in" } } },
//!   "content": ["#logo", { "type": "drawing", "id": "box", "pos": "10% 10%", "size": "50% 25%" }]
//! }
//! ```

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::canvas::Canvas;
use crate::content::Content;
use crate::geom::PxSize;
use crate::library::Library;

/// Error returned by [`Scene::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// The document is not valid JSON or does not have the scene shape.
    #[error("invalid scene document: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A decoded scene document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scene {
    /// Surface width in pixels. Falls back to the caller's default when absent.
    #[serde(default)]
    pub width: Option<i64>,
    /// Surface height in pixels. Falls back to the caller's default when absent.
    #[serde(default)]
    pub height: Option<i64>,
    /// Library entries by category, then id.
    #[serde(default)]
    pub library: HashMap<String, HashMap<String, Content>>,
    /// Content references added to the default viewport, in order.
    #[serde(default)]
    pub content: Vec<Value>,
}

impl Scene {
    /// Decode a scene document.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Decode`] if the text is not a valid scene.
    pub fn from_json(text: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build a canvas: size it, fill its library, then add the content.
    ///
    /// The library is populated before any reference is resolved, so content
    /// may refer to any library entry regardless of document order.
    #[must_use]
    pub fn into_canvas(self, default_size: PxSize) -> Canvas {
        let width = self.width.unwrap_or(default_size.width);
        let height = self.height.unwrap_or(default_size.height);

        let mut canvas = Canvas::new(width, height);
        *canvas.library_mut() = Library::from(self.library);

        let requested = self.content.len();
        let admitted: usize = self.content.into_iter().map(|item| canvas.add(item)).sum();
        tracing::debug!(width, height, requested, admitted, "scene loaded");
        canvas
    }
}
