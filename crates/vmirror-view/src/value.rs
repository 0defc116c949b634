//! Property values at the host boundary
//!
//! Host properties are dynamically typed. They are resolved into a closed set
//! of variants when they cross into the mirror so every consumer can match
//! exhaustively.

use std::fmt;

use vmirror_style::{Color, Length, format_number};

/// A property value as reported by the host
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Declared but never assigned
    Undefined,
    /// Explicitly assigned "nothing"
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Color(Color),
    Length(Length),
    /// Any other object-shaped value (nested containers, records)
    Structured(serde_json::Value),
}

impl PropertyValue {
    /// `Undefined` or `Null`
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }
}

/// Default textual form: absent values print as `null` / `undefined`.
impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(value) => f.write_str(&format_number(*value)),
            Self::String(value) => f.write_str(value),
            Self::Color(color) => write!(f, "{color}"),
            Self::Length(length) => write!(f, "{length}"),
            Self::Structured(value) => write!(f, "{value}"),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Color> for PropertyValue {
    fn from(value: Color) -> Self {
        Self::Color(value)
    }
}

impl From<Length> for PropertyValue {
    fn from(value: Length) -> Self {
        Self::Length(value)
    }
}

impl From<serde_json::Value> for PropertyValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Structured(value)
    }
}

/// A property write: either a value or the host's "unset" sentinel.
///
/// `Unset` is distinct from every value, `Null` included.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyWrite {
    Set(PropertyValue),
    Unset,
}

impl From<PropertyValue> for PropertyWrite {
    fn from(value: PropertyValue) -> Self {
        Self::Set(value)
    }
}
