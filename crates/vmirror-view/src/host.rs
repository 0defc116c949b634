//! Host view contract
//!
//! Implemented by the UI framework that owns the live tree. The mirror only
//! reads through this trait; it never mutates the host.

use crate::{PropertyValue, ViewId};

/// Read access to a live view tree
pub trait ViewHost {
    /// Declared type name of the view (`"StackLayout"`, `"Button"`, ...).
    ///
    /// Unknown views report an empty name.
    fn type_name(&self, view: ViewId) -> &str;

    /// Whether `view` is the top-level container of the tree
    fn is_root(&self, view: ViewId) -> bool;

    /// Visit the live children of `view` in order.
    ///
    /// The visitor returns `false` to stop the traversal early.
    fn each_child(&self, view: ViewId, visit: &mut dyn FnMut(ViewId) -> bool);

    /// Properties explicitly set on `view`, in the order the host stores them
    fn set_properties(&self, view: ViewId) -> Vec<(String, PropertyValue)>;

    /// Resolved style of `view`, in the order the host reports it
    fn computed_style(&self, view: ViewId) -> Vec<(String, PropertyValue)>;

    /// Live children of `view`, collected in order
    fn child_ids(&self, view: ViewId) -> Vec<ViewId> {
        let mut children = Vec::new();
        self.each_child(view, &mut |child| {
            children.push(child);
            true
        });
        children
    }
}
