//! Property storage
//!
//! Insertion-ordered name/value map. Re-setting a name keeps its position.

use std::collections::HashMap;

use crate::PropertyValue;

/// Ordered property map
#[derive(Debug, Clone, Default)]
pub struct PropertyMap {
    entries: Vec<(String, PropertyValue)>,
    by_name: HashMap<String, usize>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get property value
    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.by_name.get(name).map(|&index| &self.entries[index].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Set property, returning the previous value
    pub fn set(&mut self, name: &str, value: PropertyValue) -> Option<PropertyValue> {
        if let Some(&index) = self.by_name.get(name) {
            Some(std::mem::replace(&mut self.entries[index].1, value))
        } else {
            self.by_name.insert(name.to_string(), self.entries.len());
            self.entries.push((name.to_string(), value));
            None
        }
    }

    /// Remove property by name
    pub fn remove(&mut self, name: &str) -> Option<PropertyValue> {
        let index = self.by_name.remove(name)?;
        // Shift indices of the entries after the removed one
        for idx in self.by_name.values_mut() {
            if *idx > index {
                *idx -= 1;
            }
        }
        Some(self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Owned copy of the entries, in order
    pub fn to_pairs(&self) -> Vec<(String, PropertyValue)> {
        self.entries.clone()
    }
}
