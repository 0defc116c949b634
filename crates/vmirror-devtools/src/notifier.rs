//! Mutation notifier
//!
//! Runs inline with every live-tree mutation and forwards it to the attached
//! inspector. Without an inspector every notification is a silent no-op; the
//! shadow cache is still kept in step with attribute changes.

use std::fmt;
use std::rc::Rc;

use vmirror_view::{MutationRecord, PropertyValue, ViewHost, ViewId};

use crate::codec::stringify;
use crate::inspector::Inspector;
use crate::projector::AttributeProjector;
use crate::shadow::{NodeSnapshot, ShadowCache, ShadowNode};
use crate::MirrorConfig;

/// Forwards tree mutations to an optional inspector
pub struct MutationNotifier {
    cache: ShadowCache,
    inspector: Option<Box<dyn Inspector>>,
}

impl fmt::Debug for MutationNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutationNotifier")
            .field("cache", &self.cache)
            .field("attached", &self.is_attached())
            .finish()
    }
}

impl Default for MutationNotifier {
    fn default() -> Self {
        Self::detached(MirrorConfig::default())
    }
}

impl MutationNotifier {
    pub fn new(config: MirrorConfig, inspector: Option<Box<dyn Inspector>>) -> Self {
        Self { cache: ShadowCache::new(config), inspector }
    }

    /// No inspector attached
    pub fn detached(config: MirrorConfig) -> Self {
        Self::new(config, None)
    }

    /// Attach an inspector for a new debugging session, returning the old one
    pub fn attach(&mut self, inspector: Box<dyn Inspector>) -> Option<Box<dyn Inspector>> {
        tracing::info!("Inspector attached");
        self.inspector.replace(inspector)
    }

    pub fn detach(&mut self) -> Option<Box<dyn Inspector>> {
        let previous = self.inspector.take();
        if previous.is_some() {
            tracing::info!("Inspector detached");
        }
        previous
    }

    pub fn is_attached(&self) -> bool {
        self.inspector.is_some()
    }

    pub fn cache(&self) -> &ShadowCache {
        &self.cache
    }

    pub fn config(&self) -> &MirrorConfig {
        self.cache.config()
    }

    /// Shadow node for `view`, materialized on first request
    pub fn ensure<H: ViewHost + ?Sized>(&self, host: &H, view: ViewId) -> Rc<ShadowNode> {
        self.cache.ensure(host, view)
    }

    /// Full snapshot from `root`, for an inspector that just attached
    pub fn document<H: ViewHost + ?Sized>(&self, host: &H, root: ViewId) -> NodeSnapshot {
        self.cache.ensure(host, root).serialize(host, &self.cache)
    }

    /// Drop the shadow nodes of disposed views
    pub fn release(&self, views: &[ViewId]) {
        for &view in views {
            self.cache.release(view);
        }
    }

    /// Route a mutation record to its hook
    pub fn dispatch<H: ViewHost + ?Sized>(&mut self, host: &H, record: &MutationRecord) {
        match record {
            MutationRecord::ChildInserted { parent, child, .. } => self.child_inserted(host, *parent, *child),
            MutationRecord::ChildRemoved { parent, child } => self.child_removed(*parent, *child),
            MutationRecord::PropertySet { view, name, value } => self.attribute_set(*view, name, value),
            MutationRecord::PropertyUnset { view, name } => self.attribute_unset(*view, name),
        }
    }

    /// `child` was inserted under `parent`; the host already reflects it
    pub fn child_inserted<H: ViewHost + ?Sized>(&mut self, host: &H, parent: ViewId, child: ViewId) {
        let Some(inspector) = self.inspector.as_mut() else {
            return;
        };
        let Some(parent_node) = self.cache.get(parent) else {
            return;
        };

        // Last child seen strictly before `child` in the post-insertion order
        let mut previous = ViewId::NONE;
        host.each_child(parent, &mut |sibling| {
            if sibling == child {
                return false;
            }
            previous = sibling;
            true
        });

        let node = self.cache.ensure(host, child);
        let node_json = match node.to_wire_string(host, &self.cache) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!("Dropping childNodeInserted for {}: {}", child, err);
                return;
            }
        };

        tracing::debug!("childNodeInserted {} under {} after {}", child, parent, previous);
        inspector.child_node_inserted(parent_node.node_id().get(), previous.get(), &node_json);
    }

    /// `child` was detached from `parent`
    pub fn child_removed(&mut self, parent: ViewId, child: ViewId) {
        let Some(inspector) = self.inspector.as_mut() else {
            return;
        };
        let Some(parent_node) = self.cache.get(parent) else {
            return;
        };

        tracing::debug!("childNodeRemoved {} from {}", child, parent);
        inspector.child_node_removed(parent_node.node_id().get(), child.get());
    }

    /// Property set or changed on `view`
    pub fn attribute_set(&mut self, view: ViewId, name: &str, value: &PropertyValue) {
        let Some(node) = self.cache.get(view) else {
            return;
        };
        let projector = AttributeProjector::new(self.cache.config());
        if !projector.accepts_name(name) {
            tracing::trace!("Ignoring change of hidden property {}", name);
            return;
        }

        if value.is_structured() {
            // Structured values are never surfaced; drop any stale text
            if node.remove_attribute(name) {
                self.emit_removed(&node, name);
            }
            return;
        }

        node.set_attribute(name, AttributeProjector::attribute_text(value));
        if let Some(inspector) = self.inspector.as_mut() {
            let text = stringify(value);
            tracing::debug!("attributeModified {} {}={:?}", view, name, text);
            inspector.attribute_modified(node.node_id().get(), name, &text);
        }
    }

    /// Property on `view` reset to the unset sentinel
    pub fn attribute_unset(&mut self, view: ViewId, name: &str) {
        let Some(node) = self.cache.get(view) else {
            return;
        };
        if !AttributeProjector::new(self.cache.config()).accepts_name(name) {
            return;
        }

        if node.remove_attribute(name) {
            self.emit_removed(&node, name);
        }
    }

    /// Ask the inspector to re-fetch the whole document
    pub fn document_updated(&mut self) {
        if let Some(inspector) = self.inspector.as_mut() {
            tracing::debug!("documentUpdated");
            inspector.document_updated();
        }
    }

    fn emit_removed(&mut self, node: &ShadowNode, name: &str) {
        if let Some(inspector) = self.inspector.as_mut() {
            tracing::debug!("attributeRemoved {} {}", node.node_id(), name);
            inspector.attribute_removed(node.node_id().get(), name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspector::{InspectorEvent, RecordingInspector};
    use vmirror_view::ViewTree;

    fn attached() -> (MutationNotifier, RecordingInspector) {
        let recorder = RecordingInspector::new();
        let notifier = MutationNotifier::new(MirrorConfig::default(), Some(Box::new(recorder.clone())));
        (notifier, recorder)
    }

    #[test]
    fn test_detached_notifier_is_silent() {
        let mut tree = ViewTree::new("Frame");
        let mut notifier = MutationNotifier::default();
        notifier.ensure(&tree, tree.root());

        let button = tree.create_view("Button");
        let record = tree.add_child(tree.root(), button).unwrap();
        notifier.dispatch(&tree, &record);
        notifier.document_updated();

        assert!(!notifier.is_attached());
        assert!(!notifier.cache().is_materialized(button));
    }

    #[test]
    fn test_insert_under_unmaterialized_parent_is_skipped() {
        let (mut notifier, recorder) = attached();
        let mut tree = ViewTree::new("Frame");
        let button = tree.create_view("Button");

        let record = tree.add_child(tree.root(), button).unwrap();
        notifier.dispatch(&tree, &record);

        assert!(recorder.is_empty());
    }

    #[test]
    fn test_attribute_change_keeps_mirror_in_step() {
        let (mut notifier, recorder) = attached();
        let mut tree = ViewTree::new("Frame");
        let root = tree.root();
        let node = notifier.ensure(&tree, root);

        let record = tree.set_property(root, "title", "Home").unwrap();
        notifier.dispatch(&tree, &record);
        assert_eq!(node.attribute("title").as_deref(), Some("Home"));

        let record = tree.unset_property(root, "title").unwrap().unwrap();
        notifier.dispatch(&tree, &record);
        assert_eq!(node.attribute("title"), None);

        assert_eq!(
            recorder.events(),
            vec![
                InspectorEvent::AttributeModified { node_id: root.get(), name: "title".into(), value: "Home".into() },
                InspectorEvent::AttributeRemoved { node_id: root.get(), name: "title".into() },
            ]
        );
    }

    #[test]
    fn test_null_is_modified_not_removed() {
        let (mut notifier, recorder) = attached();
        let mut tree = ViewTree::new("Frame");
        let root = tree.root();
        let node = notifier.ensure(&tree, root);

        let record = tree.set_property(root, "text", PropertyValue::Null).unwrap();
        notifier.dispatch(&tree, &record);

        assert_eq!(node.attribute("text").as_deref(), Some("null"));
        assert_eq!(
            recorder.events(),
            vec![InspectorEvent::AttributeModified { node_id: root.get(), name: "text".into(), value: "".into() }]
        );
    }

    #[test]
    fn test_structured_value_drops_attribute() {
        let (mut notifier, recorder) = attached();
        let mut tree = ViewTree::new("Frame");
        let root = tree.root();
        tree.set_property(root, "items", "a,b").unwrap();
        let node = notifier.ensure(&tree, root);

        let record = tree.set_property(root, "items", serde_json::json!(["a", "b"])).unwrap();
        notifier.dispatch(&tree, &record);
        let record = tree.set_property(root, "items", serde_json::json!(["c"])).unwrap();
        notifier.dispatch(&tree, &record);

        assert!(!node.attributes().contains("items"));
        assert_eq!(
            recorder.events(),
            vec![InspectorEvent::AttributeRemoved { node_id: root.get(), name: "items".into() }]
        );
    }

    #[test]
    fn test_unset_reports_only_mirrored_attributes() {
        let (mut notifier, recorder) = attached();
        let mut tree = ViewTree::new("Frame");
        let root = tree.root();
        tree.set_property(root, "items", serde_json::json!([1, 2])).unwrap();
        tree.set_property(root, "title", "Home").unwrap();
        let node = notifier.ensure(&tree, root);

        let record = tree.unset_property(root, "items").unwrap().unwrap();
        notifier.dispatch(&tree, &record);
        notifier.attribute_unset(root, "neverSet");
        assert!(recorder.is_empty());

        let record = tree.unset_property(root, "title").unwrap().unwrap();
        notifier.dispatch(&tree, &record);
        notifier.attribute_unset(root, "title");

        assert!(node.attributes().is_empty());
        assert_eq!(
            recorder.events(),
            vec![InspectorEvent::AttributeRemoved { node_id: root.get(), name: "title".into() }]
        );
    }

    #[test]
    fn test_hidden_properties_are_not_reported() {
        let (mut notifier, recorder) = attached();
        let mut tree = ViewTree::new("Frame");
        let root = tree.root();
        notifier.ensure(&tree, root);

        for name in ["_cache", "effectivePaddingLeft"] {
            let record = tree.set_property(root, name, 1).unwrap();
            notifier.dispatch(&tree, &record);
            let record = tree.unset_property(root, name).unwrap().unwrap();
            notifier.dispatch(&tree, &record);
        }

        assert!(recorder.is_empty());
    }

    #[test]
    fn test_attach_and_detach() {
        let mut notifier = MutationNotifier::default();
        let recorder = RecordingInspector::new();

        assert!(notifier.attach(Box::new(recorder.clone())).is_none());
        notifier.document_updated();
        assert!(notifier.detach().is_some());
        notifier.document_updated();

        assert_eq!(recorder.events(), vec![InspectorEvent::DocumentUpdated]);
    }
}
