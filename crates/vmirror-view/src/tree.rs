//! View tree (arena-based allocation)
//!
//! Reference host: views live in a `Vec` arena indexed by `ViewId - 1`.
//! Every mutating call returns the [`MutationRecord`] describing it.

use crate::{MutationRecord, PropertyMap, PropertyValue, ViewError, ViewHost, ViewId};

/// A live view
#[derive(Debug, Clone)]
pub struct ViewNode {
    /// Declared type name
    pub type_name: String,
    /// Parent view (None if detached or root)
    pub parent: Option<ViewId>,
    /// Children in layout order
    pub children: Vec<ViewId>,
    /// Explicitly set properties
    pub properties: PropertyMap,
    /// Resolved style
    pub computed: PropertyMap,
}

impl ViewNode {
    fn new(type_name: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            parent: None,
            children: Vec::new(),
            properties: PropertyMap::new(),
            computed: PropertyMap::new(),
        }
    }
}

/// Arena-based view tree
#[derive(Debug)]
pub struct ViewTree {
    nodes: Vec<Option<ViewNode>>,
    root: ViewId,
}

impl ViewTree {
    /// Create a tree whose top-level container has type `root_type_name`
    pub fn new(root_type_name: &str) -> Self {
        let mut tree = Self { nodes: Vec::new(), root: ViewId::NONE };
        tree.root = tree.create_view(root_type_name);
        tree
    }

    /// Top-level container
    pub fn root(&self) -> ViewId {
        self.root
    }

    /// Allocate a detached view
    pub fn create_view(&mut self, type_name: &str) -> ViewId {
        self.nodes.push(Some(ViewNode::new(type_name)));
        ViewId(self.nodes.len() as u32)
    }

    /// Get a view by ID
    pub fn get(&self, id: ViewId) -> Option<&ViewNode> {
        let index = (id.0 as usize).checked_sub(1)?;
        self.nodes.get(index)?.as_ref()
    }

    fn get_mut(&mut self, id: ViewId) -> Result<&mut ViewNode, ViewError> {
        (id.0 as usize)
            .checked_sub(1)
            .and_then(|index| self.nodes.get_mut(index))
            .and_then(Option::as_mut)
            .ok_or(ViewError::UnknownView(id))
    }

    fn require(&self, id: ViewId) -> Result<&ViewNode, ViewError> {
        self.get(id).ok_or(ViewError::UnknownView(id))
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live views, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn parent(&self, id: ViewId) -> Option<ViewId> {
        self.get(id)?.parent
    }

    pub fn children(&self, id: ViewId) -> &[ViewId] {
        self.get(id).map(|node| node.children.as_slice()).unwrap_or(&[])
    }

    /// Append `child` as the last child of `parent`
    pub fn add_child(&mut self, parent: ViewId, child: ViewId) -> Result<MutationRecord, ViewError> {
        let index = self.require(parent)?.children.len();
        self.insert_child(parent, child, index)
    }

    /// Insert `child` under `parent` so that it ends up at `index`
    pub fn insert_child(
        &mut self,
        parent: ViewId,
        child: ViewId,
        index: usize,
    ) -> Result<MutationRecord, ViewError> {
        if child == self.root {
            return Err(ViewError::RootView);
        }
        let len = self.require(parent)?.children.len();
        if let Some(existing) = self.require(child)?.parent {
            return Err(ViewError::AlreadyParented { child, parent: existing });
        }
        if index > len {
            return Err(ViewError::IndexOutOfRange { index, len });
        }

        // `parent` must not live inside `child`'s subtree
        let mut ancestor = Some(parent);
        while let Some(id) = ancestor {
            if id == child {
                return Err(ViewError::Cycle { parent, child });
            }
            ancestor = self.parent(id);
        }

        self.get_mut(parent)?.children.insert(index, child);
        self.get_mut(child)?.parent = Some(parent);

        tracing::trace!("Inserted {} under {} at {}", child, parent, index);
        Ok(MutationRecord::ChildInserted { parent, child, index })
    }

    /// Detach `child` from `parent`
    pub fn remove_child(&mut self, parent: ViewId, child: ViewId) -> Result<MutationRecord, ViewError> {
        let position = self
            .require(parent)?
            .children
            .iter()
            .position(|&id| id == child)
            .ok_or(ViewError::NotAChild { parent, child })?;

        self.get_mut(parent)?.children.remove(position);
        self.get_mut(child)?.parent = None;

        tracing::trace!("Removed {} from {}", child, parent);
        Ok(MutationRecord::ChildRemoved { parent, child })
    }

    /// Set or change a property
    pub fn set_property(
        &mut self,
        view: ViewId,
        name: &str,
        value: impl Into<PropertyValue>,
    ) -> Result<MutationRecord, ViewError> {
        let value = value.into();
        self.get_mut(view)?.properties.set(name, value.clone());
        Ok(MutationRecord::PropertySet { view, name: name.to_string(), value })
    }

    /// Reset a property to the unset sentinel.
    ///
    /// Returns `None` when `name` was not set, since nothing changed.
    pub fn unset_property(&mut self, view: ViewId, name: &str) -> Result<Option<MutationRecord>, ViewError> {
        let removed = self.get_mut(view)?.properties.remove(name);
        Ok(removed.map(|_| MutationRecord::PropertyUnset { view, name: name.to_string() }))
    }

    /// Record a resolved style value; style resolution is not a tree mutation
    pub fn set_computed_style(
        &mut self,
        view: ViewId,
        name: &str,
        value: impl Into<PropertyValue>,
    ) -> Result<(), ViewError> {
        self.get_mut(view)?.computed.set(name, value.into());
        Ok(())
    }

    /// Free a detached view and its whole subtree.
    ///
    /// Returns the disposed ids, `view` first.
    pub fn dispose(&mut self, view: ViewId) -> Result<Vec<ViewId>, ViewError> {
        if view == self.root {
            return Err(ViewError::RootView);
        }
        if self.require(view)?.parent.is_some() {
            return Err(ViewError::StillAttached(view));
        }

        let mut disposed = Vec::new();
        let mut stack = vec![view];
        while let Some(id) = stack.pop() {
            let index = id.0 as usize - 1;
            if let Some(node) = self.nodes[index].take() {
                stack.extend(node.children.iter().rev());
                disposed.push(id);
            }
        }

        tracing::trace!("Disposed {} views rooted at {}", disposed.len(), view);
        Ok(disposed)
    }
}

impl ViewHost for ViewTree {
    fn type_name(&self, view: ViewId) -> &str {
        self.get(view).map(|node| node.type_name.as_str()).unwrap_or("")
    }

    fn is_root(&self, view: ViewId) -> bool {
        view == self.root
    }

    fn each_child(&self, view: ViewId, visit: &mut dyn FnMut(ViewId) -> bool) {
        for &child in self.children(view) {
            if !visit(child) {
                break;
            }
        }
    }

    fn set_properties(&self, view: ViewId) -> Vec<(String, PropertyValue)> {
        self.get(view).map(|node| node.properties.to_pairs()).unwrap_or_default()
    }

    fn computed_style(&self, view: ViewId) -> Vec<(String, PropertyValue)> {
        self.get(view).map(|node| node.computed.to_pairs()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_with_buttons(count: usize) -> (ViewTree, ViewId, Vec<ViewId>) {
        let mut tree = ViewTree::new("Frame");
        let stack = tree.create_view("StackLayout");
        tree.add_child(tree.root(), stack).unwrap();
        let buttons = (0..count)
            .map(|_| {
                let button = tree.create_view("Button");
                tree.add_child(stack, button).unwrap();
                button
            })
            .collect();
        (tree, stack, buttons)
    }

    #[test]
    fn test_root_view() {
        let tree = ViewTree::new("Frame");
        assert_eq!(tree.root(), ViewId(1));
        assert!(tree.is_root(tree.root()));
        assert_eq!(tree.type_name(tree.root()), "Frame");
    }

    #[test]
    fn test_insert_child_at_index() {
        let (mut tree, stack, buttons) = stack_with_buttons(3);
        let label = tree.create_view("Label");

        let record = tree.insert_child(stack, label, 1).unwrap();

        assert_eq!(record, MutationRecord::ChildInserted { parent: stack, child: label, index: 1 });
        assert_eq!(tree.children(stack), &[buttons[0], label, buttons[1], buttons[2]]);
        assert_eq!(tree.parent(label), Some(stack));
    }

    #[test]
    fn test_insert_rejects_bad_input() {
        let (mut tree, stack, buttons) = stack_with_buttons(1);
        let label = tree.create_view("Label");

        assert_eq!(
            tree.insert_child(stack, label, 5),
            Err(ViewError::IndexOutOfRange { index: 5, len: 1 })
        );
        assert_eq!(
            tree.add_child(stack, buttons[0]),
            Err(ViewError::AlreadyParented { child: buttons[0], parent: stack })
        );
        assert_eq!(tree.add_child(stack, tree.root()), Err(ViewError::RootView));
        assert_eq!(tree.add_child(stack, ViewId(99)), Err(ViewError::UnknownView(ViewId(99))));
    }

    #[test]
    fn test_insert_rejects_cycle() {
        let (mut tree, stack, _) = stack_with_buttons(0);
        let inner = tree.create_view("StackLayout");
        tree.add_child(stack, inner).unwrap();
        tree.remove_child(tree.root(), stack).unwrap();

        assert_eq!(tree.add_child(inner, stack), Err(ViewError::Cycle { parent: inner, child: stack }));
    }

    #[test]
    fn test_remove_child() {
        let (mut tree, stack, buttons) = stack_with_buttons(2);

        let record = tree.remove_child(stack, buttons[0]).unwrap();

        assert_eq!(record, MutationRecord::ChildRemoved { parent: stack, child: buttons[0] });
        assert_eq!(tree.children(stack), &[buttons[1]]);
        assert_eq!(tree.parent(buttons[0]), None);
        assert_eq!(
            tree.remove_child(stack, buttons[0]),
            Err(ViewError::NotAChild { parent: stack, child: buttons[0] })
        );
    }

    #[test]
    fn test_each_child_short_circuits() {
        let (tree, stack, buttons) = stack_with_buttons(3);
        let mut seen = Vec::new();
        tree.each_child(stack, &mut |child| {
            seen.push(child);
            child != buttons[1]
        });
        assert_eq!(seen, vec![buttons[0], buttons[1]]);
        assert_eq!(tree.child_ids(stack), buttons);
    }

    #[test]
    fn test_property_records() {
        let (mut tree, _, buttons) = stack_with_buttons(1);
        let button = buttons[0];

        let set = tree.set_property(button, "text", "hello").unwrap();
        assert_eq!(
            set,
            MutationRecord::PropertySet { view: button, name: "text".into(), value: "hello".into() }
        );
        assert_eq!(tree.set_properties(button), vec![("text".to_string(), PropertyValue::from("hello"))]);

        let unset = tree.unset_property(button, "text").unwrap();
        assert_eq!(unset, Some(MutationRecord::PropertyUnset { view: button, name: "text".into() }));
        assert!(tree.set_properties(button).is_empty());
    }

    #[test]
    fn test_unset_of_missing_property_is_not_a_change() {
        let (mut tree, _, buttons) = stack_with_buttons(1);

        assert_eq!(tree.unset_property(buttons[0], "neverSet"), Ok(None));
        assert_eq!(tree.unset_property(ViewId(99), "text"), Err(ViewError::UnknownView(ViewId(99))));
    }

    #[test]
    fn test_dispose_subtree() {
        let (mut tree, stack, buttons) = stack_with_buttons(2);
        assert_eq!(tree.dispose(stack), Err(ViewError::StillAttached(stack)));

        tree.remove_child(tree.root(), stack).unwrap();
        let disposed = tree.dispose(stack).unwrap();

        assert_eq!(disposed, vec![stack, buttons[0], buttons[1]]);
        assert!(!tree.contains(buttons[1]));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.dispose(tree.root()), Err(ViewError::RootView));
    }
}
