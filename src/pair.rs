//! Position and size pairs: two correlated unit values parsed together.
//!
//! Both pairs accept the same argument shapes:
//!
//! | Shape | Example |
//! |-------|---------|
//! | two components | `(10, "20%")` |
//! | one space-separated string | `"10px 20%"` |
//! | one object | `{ "x": 10, "y": "20%" }` / `{ "width": "1in", "h": 40 }` |
//! | one two-element array | `[10, "20%"]` |
//!
//! A field is present when it exists and is not `null`. Zero and the empty
//! string are present values.

#[cfg(test)]
#[path = "pair_test.rs"]
mod pair_test;

use serde_json::{Map, Value};

use crate::error::{Axis, LayoutError};
use crate::geom::{PxPoint, PxSize};
use crate::unit::UnitValue;

static NULL: Value = Value::Null;

/// Pair arguments after classification by shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PairInput<'a> {
    /// Two separate components, first axis then second axis.
    Components(&'a Value, &'a Value),
    /// A single string holding both components separated by one space.
    Text(&'a str),
    /// A single object with named fields.
    Object(&'a Map<String, Value>),
    /// Nothing usable.
    Empty,
}

impl<'a> PairInput<'a> {
    /// Classify a one- or two-argument call.
    ///
    /// A present second argument always selects the two-component form.
    #[must_use]
    pub fn classify(first: Option<&'a Value>, second: Option<&'a Value>) -> Self {
        if let Some(second) = present(second) {
            return Self::Components(present(first).unwrap_or(&NULL), second);
        }
        match present(first) {
            Some(Value::String(text)) => Self::Text(text),
            Some(Value::Object(map)) => Self::Object(map),
            Some(Value::Array(items)) if items.len() == 2 => Self::Components(&items[0], &items[1]),
            _ => Self::Empty,
        }
    }
}

/// A position in a parent's coordinate frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: UnitValue,
    pub y: UnitValue,
}

/// A position resolved to pixels, axis by axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionPx {
    pub x: Option<i64>,
    pub y: Option<i64>,
}

impl Position {
    #[must_use]
    pub fn new(x: UnitValue, y: UnitValue) -> Self {
        Self { x, y }
    }

    /// Parse a one- or two-argument call. See [`PairInput::classify`].
    #[must_use]
    pub fn parse(first: Option<&Value>, second: Option<&Value>) -> Self {
        Self::from_input(PairInput::classify(first, second))
    }

    /// Parse a single value (string, object or two-element array).
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self::parse(Some(value), None)
    }

    #[must_use]
    pub fn from_input(input: PairInput<'_>) -> Self {
        match input {
            PairInput::Components(x, y) => Self::from_components(x, y),
            PairInput::Text(text) => Self::from_text(text),
            PairInput::Object(map) => Self::from_object(map),
            PairInput::Empty => Self::default(),
        }
    }

    #[must_use]
    pub fn from_components(x: &Value, y: &Value) -> Self {
        Self { x: UnitValue::parse(x), y: UnitValue::parse(y) }
    }

    /// Parse `"<x> <y>"`. Any token count other than two leaves both axes unset.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        match split_pair(text) {
            Some((x, y)) => Self { x: UnitValue::from_text(x), y: UnitValue::from_text(y) },
            None => Self::default(),
        }
    }

    /// Parse `{ "x": .., "y": .. }`. Both fields are required.
    #[must_use]
    pub fn from_object(map: &Map<String, Value>) -> Self {
        match (field(map, "x"), field(map, "y")) {
            (Some(x), Some(y)) => Self::from_components(x, y),
            _ => {
                tracing::debug!("position object needs both x and y");
                Self::default()
            }
        }
    }

    /// Whether both axes were parsed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.x.is_set() && self.y.is_set()
    }

    /// Resolve against the parent's pixel extent: `x` against its width and
    /// `y` against its height.
    #[must_use]
    pub fn to_px(&self, reference: PxSize) -> PositionPx {
        PositionPx { x: self.x.to_px(reference.width), y: self.y.to_px(reference.height) }
    }
}

impl PositionPx {
    /// Combine both axes into a point, reporting the first unresolved one.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Unresolved`] naming `x` or `y`.
    pub fn point(self) -> Result<PxPoint, LayoutError> {
        let x = self.x.ok_or(LayoutError::Unresolved(Axis::X))?;
        let y = self.y.ok_or(LayoutError::Unresolved(Axis::Y))?;
        Ok(PxPoint::new(x, y))
    }
}

/// An extent in a parent's coordinate frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub w: UnitValue,
    pub h: UnitValue,
}

/// A size resolved to pixels, axis by axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizePx {
    pub w: Option<i64>,
    pub h: Option<i64>,
}

impl Size {
    #[must_use]
    pub fn new(w: UnitValue, h: UnitValue) -> Self {
        Self { w, h }
    }

    /// Parse a one- or two-argument call. See [`PairInput::classify`].
    #[must_use]
    pub fn parse(first: Option<&Value>, second: Option<&Value>) -> Self {
        Self::from_input(PairInput::classify(first, second))
    }

    /// Parse a single value (string, object or two-element array).
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self::parse(Some(value), None)
    }

    #[must_use]
    pub fn from_input(input: PairInput<'_>) -> Self {
        match input {
            PairInput::Components(w, h) => Self::from_components(w, h),
            PairInput::Text(text) => Self::from_text(text),
            PairInput::Object(map) => Self::from_object(map),
            PairInput::Empty => Self::default(),
        }
    }

    #[must_use]
    pub fn from_components(w: &Value, h: &Value) -> Self {
        Self { w: UnitValue::parse(w), h: UnitValue::parse(h) }
    }

    /// Parse `"<w> <h>"`. Any token count other than two leaves both axes unset.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        match split_pair(text) {
            Some((w, h)) => Self { w: UnitValue::from_text(w), h: UnitValue::from_text(h) },
            None => Self::default(),
        }
    }

    /// Parse `{ "width": .., "height": .. }`, falling back to `w` / `h` per axis.
    #[must_use]
    pub fn from_object(map: &Map<String, Value>) -> Self {
        let w = field(map, "width").or_else(|| field(map, "w"));
        let h = field(map, "height").or_else(|| field(map, "h"));
        match (w, h) {
            (Some(w), Some(h)) => Self::from_components(w, h),
            _ => {
                tracing::debug!("size object needs width/w and height/h");
                Self::default()
            }
        }
    }

    /// Whether both axes were parsed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.w.is_set() && self.h.is_set()
    }

    /// Resolve against the parent's pixel extent: `w` against its width and
    /// `h` against its height.
    #[must_use]
    pub fn to_px(&self, reference: PxSize) -> SizePx {
        SizePx { w: self.w.to_px(reference.width), h: self.h.to_px(reference.height) }
    }
}

impl SizePx {
    /// Combine both axes into a size, reporting the first unresolved one.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Unresolved`] naming `width` or `height`.
    pub fn size(self) -> Result<PxSize, LayoutError> {
        let width = self.w.ok_or(LayoutError::Unresolved(Axis::Width))?;
        let height = self.h.ok_or(LayoutError::Unresolved(Axis::Height))?;
        Ok(PxSize::new(width, height))
    }
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn field<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    present(map.get(key))
}

/// Split on single spaces, accepting exactly two tokens.
fn split_pair(text: &str) -> Option<(&str, &str)> {
    let mut tokens = text.trim().split(' ');
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(first), Some(second), None) => Some((first, second)),
        _ => {
            tracing::debug!(input = text, "pair string needs exactly two space-separated tokens");
            None
        }
    }
}
