//! Mirror configuration
//!
//! Which set properties are hidden from the inspector.

use serde::Deserialize;

/// Properties that are derived box-model values or internal bookkeeping.
/// Redundant with computed style, so never surfaced as attributes.
pub const DEFAULT_DENY_LIST: &[&str] = &[
    "effectivePaddingLeft",
    "effectivePaddingBottom",
    "effectivePaddingRight",
    "effectivePaddingTop",
    "effectiveBorderTopWidth",
    "effectiveBorderRightWidth",
    "effectiveBorderBottomWidth",
    "effectiveBorderLeftWidth",
    "effectiveMinWidth",
    "nodeName",
    "nodeType",
    "decodeWidth",
    "decodeHeight",
];

/// Prefix of framework-private property names
pub const DEFAULT_INTERNAL_PREFIX: &str = "_";

/// Mirror configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MirrorConfig {
    /// Names starting with this prefix are private to the framework
    pub internal_prefix: String,

    /// Names that are never projected
    pub deny_list: Vec<String>,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            internal_prefix: DEFAULT_INTERNAL_PREFIX.to_string(),
            deny_list: DEFAULT_DENY_LIST.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl MirrorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_internal_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.internal_prefix = prefix.into();
        self
    }

    /// Hide one more property name
    pub fn deny(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.is_denied(&name) {
            self.deny_list.push(name);
        }
        self
    }

    /// Framework-private name. An empty prefix marks nothing as private.
    pub fn is_internal(&self, name: &str) -> bool {
        !self.internal_prefix.is_empty() && name.starts_with(&self.internal_prefix)
    }

    pub fn is_denied(&self, name: &str) -> bool {
        self.deny_list.iter().any(|denied| denied == name)
    }
}
