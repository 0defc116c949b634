//! Mutation records
//!
//! One record per structural or property change, in the order they happen.

use crate::{PropertyValue, ViewId};

/// A single change to the live tree
#[derive(Debug, Clone, PartialEq)]
pub enum MutationRecord {
    /// `child` now sits at `index` under `parent`
    ChildInserted {
        parent: ViewId,
        child: ViewId,
        index: usize,
    },
    /// `child` was detached from `parent`
    ChildRemoved { parent: ViewId, child: ViewId },
    /// Property set or changed
    PropertySet {
        view: ViewId,
        name: String,
        value: PropertyValue,
    },
    /// Property reset to the unset sentinel
    PropertyUnset { view: ViewId, name: String },
}
