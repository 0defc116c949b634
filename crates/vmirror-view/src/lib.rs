//! vmirror view - host view contract
//!
//! What the inspector mirror needs from a UI framework: stable view ids, type
//! names, ordered children, set properties and computed style. Also ships an
//! arena-backed reference tree that implements the contract and reports each
//! mutation as a [`MutationRecord`].

mod host;
mod mutation;
mod properties;
mod tree;
mod value;

pub use host::ViewHost;
pub use mutation::MutationRecord;
pub use properties::PropertyMap;
pub use tree::{ViewNode, ViewTree};
pub use value::{PropertyValue, PropertyWrite};

pub use vmirror_style::{Color, Length};

use std::fmt;

/// Stable view identifier, assigned by the host.
///
/// `0` never names a view; the inspector protocol uses it for "no node".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub u32);

impl ViewId {
    /// Placeholder for "no view"
    pub const NONE: ViewId = ViewId(0);

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// View tree error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ViewError {
    #[error("Unknown view: {0}")]
    UnknownView(ViewId),

    #[error("View {child} already has parent {parent}")]
    AlreadyParented { child: ViewId, parent: ViewId },

    #[error("View {child} is not a child of {parent}")]
    NotAChild { parent: ViewId, child: ViewId },

    #[error("Index {index} out of range for {len} children")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("View {0} is still attached to the tree")]
    StillAttached(ViewId),

    #[error("The root view cannot be moved or disposed")]
    RootView,

    #[error("Inserting {child} under {parent} would create a cycle")]
    Cycle { parent: ViewId, child: ViewId },
}
