//! Inspected tree
//!
//! Binds the reference view tree to a notifier: each mutating call applies
//! the change and notifies before it returns, so notifications follow
//! mutation order exactly.

use std::rc::Rc;

use vmirror_view::{MutationRecord, PropertyValue, PropertyWrite, ViewId, ViewTree};

use crate::notifier::MutationNotifier;
use crate::shadow::{ComputedProperty, NodeSnapshot, ShadowNode};
use crate::Result;

/// A view tree under inspection
#[derive(Debug)]
pub struct InspectedTree {
    tree: ViewTree,
    notifier: MutationNotifier,
}

impl InspectedTree {
    pub fn new(tree: ViewTree, notifier: MutationNotifier) -> Self {
        Self { tree, notifier }
    }

    pub fn tree(&self) -> &ViewTree {
        &self.tree
    }

    pub fn notifier(&self) -> &MutationNotifier {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut MutationNotifier {
        &mut self.notifier
    }

    pub fn root(&self) -> ViewId {
        self.tree.root()
    }

    /// Shadow node for `view`, materialized on first request
    pub fn ensure(&self, view: ViewId) -> Rc<ShadowNode> {
        self.notifier.ensure(&self.tree, view)
    }

    /// Snapshot of the whole tree
    pub fn document(&self) -> NodeSnapshot {
        self.notifier.document(&self.tree, self.tree.root())
    }

    pub fn computed_properties(&self, view: ViewId) -> Vec<ComputedProperty> {
        self.ensure(view).computed_properties(&self.tree, self.notifier.config())
    }

    pub fn create_view(&mut self, type_name: &str) -> ViewId {
        self.tree.create_view(type_name)
    }

    pub fn add_child(&mut self, parent: ViewId, child: ViewId) -> Result<()> {
        let record = self.tree.add_child(parent, child)?;
        self.apply(&record);
        Ok(())
    }

    pub fn insert_child(&mut self, parent: ViewId, child: ViewId, index: usize) -> Result<()> {
        let record = self.tree.insert_child(parent, child, index)?;
        self.apply(&record);
        Ok(())
    }

    pub fn remove_child(&mut self, parent: ViewId, child: ViewId) -> Result<()> {
        let record = self.tree.remove_child(parent, child)?;
        self.apply(&record);
        Ok(())
    }

    pub fn set_property(&mut self, view: ViewId, name: &str, value: impl Into<PropertyValue>) -> Result<()> {
        let record = self.tree.set_property(view, name, value)?;
        self.apply(&record);
        Ok(())
    }

    pub fn unset_property(&mut self, view: ViewId, name: &str) -> Result<()> {
        if let Some(record) = self.tree.unset_property(view, name)? {
            self.apply(&record);
        }
        Ok(())
    }

    /// Apply a property write, value or unset sentinel
    pub fn write_property(&mut self, view: ViewId, name: &str, write: PropertyWrite) -> Result<()> {
        match write {
            PropertyWrite::Set(value) => self.set_property(view, name, value),
            PropertyWrite::Unset => self.unset_property(view, name),
        }
    }

    pub fn set_computed_style(&mut self, view: ViewId, name: &str, value: impl Into<PropertyValue>) -> Result<()> {
        Ok(self.tree.set_computed_style(view, name, value)?)
    }

    /// Dispose a detached subtree; its shadow nodes go with it
    pub fn dispose(&mut self, view: ViewId) -> Result<()> {
        let disposed = self.tree.dispose(view)?;
        self.notifier.release(&disposed);
        Ok(())
    }

    fn apply(&mut self, record: &MutationRecord) {
        self.notifier.dispatch(&self.tree, record);
    }
}
