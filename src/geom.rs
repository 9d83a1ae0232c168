#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

use crate::error::{Axis, LayoutError};

/// A resolved point in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PxPoint {
    pub x: i64,
    pub y: i64,
}

impl PxPoint {
    #[must_use]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Translate this point by `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::OutOfRange`] for the first axis whose sum does
    /// not fit in an `i64`.
    pub fn offset_by(self, offset: PxPoint) -> Result<Self, LayoutError> {
        let x = self.x.checked_add(offset.x).ok_or(LayoutError::OutOfRange(Axis::X))?;
        let y = self.y.checked_add(offset.y).ok_or(LayoutError::OutOfRange(Axis::Y))?;
        Ok(Self { x, y })
    }
}

/// A resolved extent in surface pixels.
///
/// This is the reference size percentage units resolve against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PxSize {
    pub width: i64,
    pub height: i64,
}

impl PxSize {
    #[must_use]
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PxRect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl PxRect {
    #[must_use]
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self { x, y, width, height }
    }

    /// Build a rectangle from its top-left corner and extent.
    #[must_use]
    pub fn from_parts(origin: PxPoint, size: PxSize) -> Self {
        Self { x: origin.x, y: origin.y, width: size.width, height: size.height }
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(&self) -> PxPoint {
        PxPoint { x: self.x, y: self.y }
    }

    #[must_use]
    pub fn size(&self) -> PxSize {
        PxSize { width: self.width, height: self.height }
    }
}
