//! Value codec
//!
//! Canonical protocol text for property values. Total: every value has a
//! string form.

use vmirror_view::PropertyValue;

/// Protocol text of `value`. Absent values become the empty string.
pub fn stringify(value: &PropertyValue) -> String {
    match value {
        PropertyValue::Undefined | PropertyValue::Null => String::new(),
        PropertyValue::Color(color) => color.to_string(),
        PropertyValue::Length(length) => length.to_string(),
        PropertyValue::Structured(json) => json.to_string(),
        PropertyValue::Bool(_) | PropertyValue::Number(_) | PropertyValue::String(_) => value.to_string(),
    }
}
