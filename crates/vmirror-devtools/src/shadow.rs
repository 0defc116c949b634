//! Shadow nodes
//!
//! A shadow node mirrors one live view. Nodes are created lazily and cached in
//! a side-table keyed by view id, so the host never carries mirror state and
//! the mirror never keeps a view alive.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use vmirror_view::{ViewHost, ViewId};

use crate::codec::stringify;
use crate::projector::{AttributeList, AttributeProjector};
use crate::MirrorConfig;

/// Node type as carried on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum NodeType {
    Element = 1,
    Root = 9,
}

impl From<NodeType> for u8 {
    fn from(node_type: NodeType) -> Self {
        node_type as u8
    }
}

impl TryFrom<u8> for NodeType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Element),
            9 => Ok(Self::Root),
            other => Err(format!("unknown node type {other}")),
        }
    }
}

/// Serialized node tree in the inspector wire format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSnapshot {
    pub node_id: u32,
    pub node_type: NodeType,
    pub node_name: String,
    pub local_name: String,
    pub node_value: String,
    pub children: Vec<NodeSnapshot>,
    pub attributes: Vec<String>,
}

/// Resolved style entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputedProperty {
    pub name: String,
    pub value: String,
}

/// Mirror of one live view
#[derive(Debug)]
pub struct ShadowNode {
    node_id: ViewId,
    node_type: NodeType,
    node_name: String,
    attributes: RefCell<AttributeList>,
}

impl ShadowNode {
    fn materialize<H: ViewHost + ?Sized>(host: &H, view: ViewId, config: &MirrorConfig) -> Self {
        let node_type = if host.is_root(view) { NodeType::Root } else { NodeType::Element };
        Self {
            node_id: view,
            node_type,
            node_name: host.type_name(view).to_string(),
            attributes: RefCell::new(AttributeProjector::new(config).project(host, view)),
        }
    }

    pub fn node_id(&self) -> ViewId {
        self.node_id
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    pub fn node_name(&self) -> &str {
        &self.node_name
    }

    /// Always the node name
    pub fn local_name(&self) -> &str {
        &self.node_name
    }

    /// Element nodes carry no text content
    pub fn node_value(&self) -> &str {
        ""
    }

    /// Snapshot of the current attribute list
    pub fn attributes(&self) -> AttributeList {
        self.attributes.borrow().clone()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).map(str::to_string)
    }

    pub(crate) fn set_attribute(&self, name: &str, value: String) {
        self.attributes.borrow_mut().set(name, value);
    }

    pub(crate) fn remove_attribute(&self, name: &str) -> bool {
        self.attributes.borrow_mut().remove(name)
    }

    /// Live children, materialized on demand. Not cached.
    pub fn children<H: ViewHost + ?Sized>(&self, host: &H, cache: &ShadowCache) -> Vec<Rc<ShadowNode>> {
        host.child_ids(self.node_id)
            .into_iter()
            .map(|child| cache.ensure(host, child))
            .collect()
    }

    /// Snapshot of this node and its live subtree
    pub fn serialize<H: ViewHost + ?Sized>(&self, host: &H, cache: &ShadowCache) -> NodeSnapshot {
        NodeSnapshot {
            node_id: self.node_id.get(),
            node_type: self.node_type,
            node_name: self.node_name.clone(),
            local_name: self.local_name().to_string(),
            node_value: self.node_value().to_string(),
            children: self
                .children(host, cache)
                .iter()
                .map(|child| child.serialize(host, cache))
                .collect(),
            attributes: self.attributes.borrow().as_slice().to_vec(),
        }
    }

    /// Snapshot encoded as JSON, the node payload of insert notifications
    pub fn to_wire_string<H: ViewHost + ?Sized>(&self, host: &H, cache: &ShadowCache) -> crate::Result<String> {
        Ok(serde_json::to_string(&self.serialize(host, cache))?)
    }

    /// Resolved style of the backing view, private names dropped
    pub fn computed_properties<H: ViewHost + ?Sized>(
        &self,
        host: &H,
        config: &MirrorConfig,
    ) -> Vec<ComputedProperty> {
        host.computed_style(self.node_id)
            .into_iter()
            .filter(|(name, _)| !config.is_internal(name))
            .map(|(name, value)| ComputedProperty { value: stringify(&value), name })
            .collect()
    }
}

/// Side-table of materialized shadow nodes
#[derive(Debug, Default)]
pub struct ShadowCache {
    config: MirrorConfig,
    nodes: RefCell<HashMap<ViewId, Rc<ShadowNode>>>,
}

impl ShadowCache {
    pub fn new(config: MirrorConfig) -> Self {
        Self { config, nodes: RefCell::new(HashMap::new()) }
    }

    pub fn config(&self) -> &MirrorConfig {
        &self.config
    }

    /// Cached node for `view`, materialized on first request
    pub fn ensure<H: ViewHost + ?Sized>(&self, host: &H, view: ViewId) -> Rc<ShadowNode> {
        if let Some(node) = self.nodes.borrow().get(&view) {
            return Rc::clone(node);
        }

        let node = Rc::new(ShadowNode::materialize(host, view, &self.config));
        tracing::debug!(
            "Materialized {} node {} with {} attributes",
            node.node_name,
            view,
            node.attributes.borrow().len()
        );
        self.nodes.borrow_mut().insert(view, Rc::clone(&node));
        node
    }

    /// Cached node, without materializing
    pub fn get(&self, view: ViewId) -> Option<Rc<ShadowNode>> {
        self.nodes.borrow().get(&view).cloned()
    }

    pub fn is_materialized(&self, view: ViewId) -> bool {
        self.nodes.borrow().contains_key(&view)
    }

    /// Drop the node of a disposed view
    pub fn release(&self, view: ViewId) -> bool {
        self.nodes.borrow_mut().remove(&view).is_some()
    }

    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }
}
