//! vmirror DevTools
//!
//! Live mirror of a host view tree for a DOM-style inspector.
//!
//! Features:
//! - Lazy shadow nodes, materialized on first reference and cached by view id
//! - Attribute projection (filtered, stringified set properties)
//! - JSON node snapshots in the inspector wire format
//! - Synchronous insert/remove/attribute notifications
//! - Computed style listing

pub mod codec;
pub mod config;
pub mod inspector;
pub mod notifier;
pub mod projector;
pub mod session;
pub mod shadow;

pub use codec::stringify;
pub use config::MirrorConfig;
pub use inspector::{Inspector, InspectorEvent, LoggingInspector, RecordingInspector};
pub use notifier::MutationNotifier;
pub use projector::{AttributeList, AttributeProjector};
pub use session::InspectedTree;
pub use shadow::{ComputedProperty, NodeSnapshot, NodeType, ShadowCache, ShadowNode};

pub use vmirror_view::{PropertyValue, PropertyWrite, ViewHost, ViewId};

/// DevTools error
#[derive(Debug, thiserror::Error)]
pub enum DevToolsError {
    #[error("View tree error: {0}")]
    View(#[from] vmirror_view::ViewError),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DevToolsError>;
