//! Layout failure reporting.
//!
//! Parsing never fails: malformed input degrades to [`crate::unit::UnitValue::Unset`].
//! The failure only becomes visible when a consumer needs concrete pixels, at
//! which point the first unresolved axis is reported as a [`LayoutError`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

use serde::Serialize;

/// One of the four coordinates that make up a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Width => "width",
            Self::Height => "height",
        })
    }
}

/// Error returned when a frame cannot be placed or sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The value for this axis was never parsed to a usable unit.
    #[error("unresolved {0} value")]
    Unresolved(Axis),
    /// The value resolved, but the resulting coordinate does not fit in an `i64`.
    #[error("{0} value is out of pixel range")]
    OutOfRange(Axis),
}

impl LayoutError {
    /// The axis that could not be placed or sized.
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::Unresolved(axis) | Self::OutOfRange(axis) => axis,
        }
    }
}
