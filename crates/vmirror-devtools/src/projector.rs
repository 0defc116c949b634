//! Attribute projection
//!
//! Turns a view's set properties into the flat `name, value, name, value, ...`
//! attribute list the inspector protocol carries.

use serde::Serialize;
use vmirror_view::{PropertyValue, ViewHost, ViewId};

use crate::MirrorConfig;
use crate::codec::stringify;

/// Flat attribute list. Even length, unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttributeList(Vec<String>);

impl AttributeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attributes (pairs)
    pub fn len(&self) -> usize {
        self.0.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.0.chunks_exact(2).position(|pair| pair[0] == name).map(|pair| pair * 2)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|index| self.0[index + 1].as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Replace the value in place, or append a new pair
    pub fn set(&mut self, name: &str, value: String) {
        match self.position(name) {
            Some(index) => self.0[index + 1] = value,
            None => {
                self.0.push(name.to_string());
                self.0.push(value);
            }
        }
    }

    /// Remove a pair; returns whether it was present
    pub fn remove(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.0.drain(index..index + 2);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.chunks_exact(2).map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// Filters and stringifies set properties
#[derive(Debug, Clone, Copy)]
pub struct AttributeProjector<'a> {
    config: &'a MirrorConfig,
}

impl<'a> AttributeProjector<'a> {
    pub fn new(config: &'a MirrorConfig) -> Self {
        Self { config }
    }

    /// Name is neither framework-private nor deny-listed
    pub fn accepts_name(&self, name: &str) -> bool {
        !self.config.is_internal(name) && !self.config.is_denied(name)
    }

    /// Pair survives projection. Structured values are never surfaced.
    pub fn accepts(&self, name: &str, value: &PropertyValue) -> bool {
        self.accepts_name(name) && !value.is_structured()
    }

    /// Attribute text of a projected value.
    ///
    /// Absent values keep their default form (`null`, `undefined`) here;
    /// only notifications go through the codec's empty-string rule.
    pub fn attribute_text(value: &PropertyValue) -> String {
        if value.is_absent() {
            value.to_string()
        } else {
            stringify(value)
        }
    }

    /// Project the set properties of `view`, in host order
    pub fn project<H: ViewHost + ?Sized>(&self, host: &H, view: ViewId) -> AttributeList {
        self.project_pairs(host.set_properties(view))
    }

    pub fn project_pairs(&self, pairs: impl IntoIterator<Item = (String, PropertyValue)>) -> AttributeList {
        let mut attributes = AttributeList::new();
        for (name, value) in pairs {
            if !self.accepts(&name, &value) {
                tracing::trace!("Skipping property {}", name);
                continue;
            }
            attributes.set(&name, Self::attribute_text(&value));
        }
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vmirror_view::Color;

    fn pairs(entries: Vec<(&str, PropertyValue)>) -> Vec<(String, PropertyValue)> {
        entries.into_iter().map(|(name, value)| (name.to_string(), value)).collect()
    }

    #[test]
    fn test_projection_keeps_host_order() {
        let config = MirrorConfig::default();
        let attributes = AttributeProjector::new(&config).project_pairs(pairs(vec![
            ("text", "hello".into()),
            ("color", Color::rgb(255, 0, 0).into()),
            ("width", 100.into()),
        ]));

        assert_eq!(attributes.as_slice(), &["text", "hello", "color", "#ff0000", "width", "100"]);
        assert_eq!(attributes.len(), 3);
    }

    #[test]
    fn test_projection_filters() {
        let config = MirrorConfig::default();
        let attributes = AttributeProjector::new(&config).project_pairs(pairs(vec![
            ("_domId", 4.into()),
            ("effectiveMinWidth", 10.into()),
            ("nodeType", 1.into()),
            ("bindingContext", json!({ "user": "x" }).into()),
            ("id", "main".into()),
        ]));

        assert_eq!(attributes.as_slice(), &["id", "main"]);
    }

    #[test]
    fn test_falsy_projection() {
        let config = MirrorConfig::default();
        let attributes = AttributeProjector::new(&config).project_pairs(pairs(vec![
            ("a", PropertyValue::Null),
            ("b", PropertyValue::Undefined),
            ("c", 0.into()),
            ("d", "".into()),
            ("e", false.into()),
        ]));

        assert_eq!(attributes.get("a"), Some("null"));
        assert_eq!(attributes.get("b"), Some("undefined"));
        assert_eq!(attributes.get("c"), Some("0"));
        assert_eq!(attributes.get("d"), Some(""));
        assert_eq!(attributes.get("e"), Some("false"));
    }

    #[test]
    fn test_duplicate_names_replace_in_place() {
        let config = MirrorConfig::default();
        let attributes = AttributeProjector::new(&config).project_pairs(pairs(vec![
            ("text", "first".into()),
            ("id", "x".into()),
            ("text", "second".into()),
        ]));

        assert_eq!(attributes.as_slice(), &["text", "second", "id", "x"]);
    }

    #[test]
    fn test_attribute_list_edits() {
        let mut attributes = AttributeList::new();
        attributes.set("a", "1".into());
        attributes.set("b", "2".into());
        attributes.set("a", "3".into());

        assert_eq!(attributes.iter().collect::<Vec<_>>(), vec![("a", "3"), ("b", "2")]);
        assert!(attributes.remove("a"));
        assert!(!attributes.remove("a"));
        assert_eq!(attributes.into_vec(), vec!["b".to_string(), "2".to_string()]);
    }
}
