//! Inspector sink
//!
//! The external consumer of mirror notifications, typically a bridge to a
//! remote debugging client. Node ids are host view ids; `0` means "none".

use std::cell::RefCell;
use std::rc::Rc;

/// Receiver of DOM-style change notifications
pub trait Inspector {
    /// `node_json` is the inserted node's wire snapshot
    fn child_node_inserted(&mut self, parent_id: u32, previous_sibling_id: u32, node_json: &str);

    fn child_node_removed(&mut self, parent_id: u32, node_id: u32);

    /// Everything may have changed; the client should re-fetch the document
    fn document_updated(&mut self);

    fn attribute_modified(&mut self, node_id: u32, name: &str, value: &str);

    fn attribute_removed(&mut self, node_id: u32, name: &str);
}

/// One notification, as delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectorEvent {
    ChildNodeInserted { parent_id: u32, previous_sibling_id: u32, node_json: String },
    ChildNodeRemoved { parent_id: u32, node_id: u32 },
    DocumentUpdated,
    AttributeModified { node_id: u32, name: String, value: String },
    AttributeRemoved { node_id: u32, name: String },
}

/// Inspector that keeps every event in order.
///
/// Clones share the same log, so a handle can be kept after the recorder is
/// boxed and handed to a notifier.
#[derive(Debug, Clone, Default)]
pub struct RecordingInspector {
    events: Rc<RefCell<Vec<InspectorEvent>>>,
}

impl RecordingInspector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<InspectorEvent> {
        self.events.borrow().clone()
    }

    pub fn take_events(&self) -> Vec<InspectorEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    fn push(&self, event: InspectorEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl Inspector for RecordingInspector {
    fn child_node_inserted(&mut self, parent_id: u32, previous_sibling_id: u32, node_json: &str) {
        self.push(InspectorEvent::ChildNodeInserted {
            parent_id,
            previous_sibling_id,
            node_json: node_json.to_string(),
        });
    }

    fn child_node_removed(&mut self, parent_id: u32, node_id: u32) {
        self.push(InspectorEvent::ChildNodeRemoved { parent_id, node_id });
    }

    fn document_updated(&mut self) {
        self.push(InspectorEvent::DocumentUpdated);
    }

    fn attribute_modified(&mut self, node_id: u32, name: &str, value: &str) {
        self.push(InspectorEvent::AttributeModified {
            node_id,
            name: name.to_string(),
            value: value.to_string(),
        });
    }

    fn attribute_removed(&mut self, node_id: u32, name: &str) {
        self.push(InspectorEvent::AttributeRemoved { node_id, name: name.to_string() });
    }
}

/// Inspector that writes every notification to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingInspector;

impl Inspector for LoggingInspector {
    fn child_node_inserted(&mut self, parent_id: u32, previous_sibling_id: u32, node_json: &str) {
        tracing::info!("DOM.childNodeInserted parent={} previous={} node={}", parent_id, previous_sibling_id, node_json);
    }

    fn child_node_removed(&mut self, parent_id: u32, node_id: u32) {
        tracing::info!("DOM.childNodeRemoved parent={} node={}", parent_id, node_id);
    }

    fn document_updated(&mut self) {
        tracing::info!("DOM.documentUpdated");
    }

    fn attribute_modified(&mut self, node_id: u32, name: &str, value: &str) {
        tracing::info!("DOM.attributeModified node={} {}={:?}", node_id, name, value);
    }

    fn attribute_removed(&mut self, node_id: u32, name: &str) {
        tracing::info!("DOM.attributeRemoved node={} {}", node_id, name);
    }
}
