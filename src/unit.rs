//! Unit values: a magnitude tagged with pixel, percent or inch units.
//!
//! Host input arrives as loosely typed values (numbers, strings such as
//! `"12px"`, `"50%"`, `"1.5in"`, or `{ "val": 3, "unit": "in" }` objects). Each
//! input is first classified into a [`UnitInput`] and then parsed into a
//! [`UnitValue`]. Parsing never fails: anything unrecognized becomes
//! [`UnitValue::Unset`], which refuses to resolve to pixels later.

#[cfg(test)]
#[path = "unit_test.rs"]
mod unit_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::consts::DPI;

/// The unit a [`UnitValue`] is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitKind {
    /// Absolute surface pixels.
    #[serde(rename = "px")]
    Pixel,
    /// Percentage of the parent's extent along the same axis.
    #[serde(rename = "%")]
    Percent,
    /// Inches at a fixed 72 DPI.
    #[serde(rename = "in")]
    Inch,
}

impl UnitKind {
    /// Look up a unit by its declared name in an object literal.
    ///
    /// Declared names are exact: `"px"`, `"%"` or `"in"`.
    #[must_use]
    pub fn from_declared(name: &str) -> Option<Self> {
        match name {
            "px" => Some(Self::Pixel),
            "%" => Some(Self::Percent),
            "in" => Some(Self::Inch),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pixel => "px",
            Self::Percent => "%",
            Self::Inch => "in",
        }
    }
}

/// The `unit` field of an object literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredUnit<'a> {
    /// Field absent or null; the unit defaults to pixels.
    Default,
    /// Field holds a string naming a unit (which may still be unknown).
    Named(&'a str),
    /// Field holds something other than a string.
    Invalid,
}

impl<'a> DeclaredUnit<'a> {
    #[must_use]
    pub fn from_field(field: Option<&'a Value>) -> Self {
        match field {
            None | Some(Value::Null) => Self::Default,
            Some(Value::String(name)) => Self::Named(name),
            Some(_) => Self::Invalid,
        }
    }
}

/// A raw input value after classification by shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitInput<'a> {
    /// A bare number, always taken as pixels.
    Number(f64),
    /// A string with an optional unit suffix, or the string `val` of an object.
    Text(&'a str),
    /// An object with a numeric `val` and an optional declared `unit`.
    Measure { val: f64, unit: DeclaredUnit<'a> },
    /// Any shape that cannot describe a unit value.
    Other,
}

impl<'a> From<&'a Value> for UnitInput<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Number(n) => n.as_f64().map_or(Self::Other, Self::Number),
            Value::String(s) => Self::Text(s),
            Value::Object(map) => match map.get("val") {
                Some(Value::String(s)) => Self::Text(s),
                Some(Value::Number(n)) => n.as_f64().map_or(Self::Other, |val| Self::Measure {
                    val,
                    unit: DeclaredUnit::from_field(map.get("unit")),
                }),
                _ => Self::Other,
            },
            _ => Self::Other,
        }
    }
}

/// A parsed magnitude and unit, or [`UnitValue::Unset`] when the input was not
/// understood.
///
/// Pixel magnitudes are always whole numbers; fractional pixel input is floored
/// at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum UnitValue {
    Px(i64),
    Percent(f64),
    Inch(f64),
    #[default]
    Unset,
}

impl UnitValue {
    /// Parse any host value. See [`UnitInput`] for the accepted shapes.
    #[must_use]
    pub fn parse(value: &Value) -> Self {
        let parsed = Self::from_input(UnitInput::from(value));
        if !parsed.is_set() {
            tracing::debug!(input = %value, "unit value left unset");
        }
        parsed
    }

    #[must_use]
    pub fn from_input(input: UnitInput<'_>) -> Self {
        match input {
            UnitInput::Number(n) => Self::from_number(n),
            UnitInput::Text(text) => Self::from_text(text),
            UnitInput::Measure { val, unit } => Self::from_measure(val, unit),
            UnitInput::Other => Self::Unset,
        }
    }

    /// A bare number is a pixel count, floored.
    #[must_use]
    pub fn from_number(n: f64) -> Self {
        floor_px(n).map_or(Self::Unset, Self::Px)
    }

    /// Parse a unit string such as `"12"`, `"12PX"`, `"37.5%"` or `"2in"`.
    ///
    /// Surrounding whitespace is ignored. Pixel strings must be whole numbers;
    /// percent and inch strings may carry a fractional part, including a bare
    /// trailing dot (`"5.in"`). Signs and exponents are not accepted.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let text = text.trim();

        let int_len = leading_digits(text);
        if int_len == 0 {
            return Self::Unset;
        }

        let (int_part, rest) = text.split_at(int_len);
        if rest.is_empty() || rest.eq_ignore_ascii_case("px") {
            return int_part.parse::<i64>().map_or(Self::Unset, Self::Px);
        }

        let number_len = match rest.strip_prefix('.') {
            Some(fraction) => int_len + 1 + leading_digits(fraction),
            None => int_len,
        };
        let (number, suffix) = text.split_at(number_len);
        let Ok(magnitude) = number.parse::<f64>() else {
            return Self::Unset;
        };

        if suffix == "%" {
            Self::Percent(magnitude)
        } else if suffix.eq_ignore_ascii_case("in") {
            Self::Inch(magnitude)
        } else {
            Self::Unset
        }
    }

    /// Build a value from an object literal's numeric `val` and `unit` fields.
    ///
    /// An unknown or non-string unit clears the value entirely.
    #[must_use]
    pub fn from_measure(val: f64, unit: DeclaredUnit<'_>) -> Self {
        let kind = match unit {
            DeclaredUnit::Default => UnitKind::Pixel,
            DeclaredUnit::Named(name) => match UnitKind::from_declared(name) {
                Some(kind) => kind,
                None => return Self::Unset,
            },
            DeclaredUnit::Invalid => return Self::Unset,
        };

        match kind {
            UnitKind::Pixel => Self::from_number(val),
            UnitKind::Percent => Self::Percent(val),
            UnitKind::Inch => Self::Inch(val),
        }
    }

    /// The unit, or `None` when unset.
    #[must_use]
    pub fn kind(self) -> Option<UnitKind> {
        match self {
            Self::Px(_) => Some(UnitKind::Pixel),
            Self::Percent(_) => Some(UnitKind::Percent),
            Self::Inch(_) => Some(UnitKind::Inch),
            Self::Unset => None,
        }
    }

    /// The magnitude, or `None` when unset.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn magnitude(self) -> Option<f64> {
        match self {
            Self::Px(m) => Some(m as f64),
            Self::Percent(m) | Self::Inch(m) => Some(m),
            Self::Unset => None,
        }
    }

    #[must_use]
    pub fn is_set(self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Resolve to whole pixels against `reference`, the parent's extent along
    /// the same axis.
    ///
    /// Returns `None` for an unset value; callers must not treat that as zero.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn to_px(self, reference: i64) -> Option<i64> {
        match self {
            Self::Px(m) => Some(m),
            Self::Percent(m) => floor_px(m / 100.0 * reference as f64),
            Self::Inch(m) => floor_px(m * DPI),
            Self::Unset => None,
        }
    }
}

impl fmt::Display for UnitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(m) => write!(f, "{m}{}", UnitKind::Pixel.as_str()),
            Self::Percent(m) => write!(f, "{m}{}", UnitKind::Percent.as_str()),
            Self::Inch(m) => write!(f, "{m}{}", UnitKind::Inch.as_str()),
            Self::Unset => f.write_str("unset"),
        }
    }
}

/// Floor to whole pixels. `None` for non-finite values and for values outside
/// the `i64` range; `i64::MAX as f64` rounds up to 2^63, hence the strict bound.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn floor_px(value: f64) -> Option<i64> {
    let floored = value.floor();
    (floored >= i64::MIN as f64 && floored < i64::MAX as f64).then(|| floored as i64)
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}
