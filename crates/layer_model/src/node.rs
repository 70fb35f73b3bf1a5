//! Layer node type

use crate::LayerId;
use serde::{Deserialize, Serialize};

/// Enumeration of all layer kinds in the tree.
///
/// The kind picks an icon and default interaction; it does not change how the
/// tree operations treat a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    Frame,
    Group,
    Text,
    Rectangle,
    Shape,
    Image,
    Component,
}

/// A node in the layer tree.
///
/// A node without a parent is a page root. Ownership lives in `children`;
/// `parent` is only a lookup aid and is never followed to reach a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerNode {
    pub id: LayerId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LayerKind,
    pub visible: bool,
    pub locked: bool,
    pub expanded: bool,
    #[serde(default)]
    pub children: Vec<LayerNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<LayerId>,
}

/// A page is a parentless layer acting as the root of one tree
pub type Page = LayerNode;

impl LayerNode {
    /// Create a visible, unlocked, collapsed leaf
    pub fn new(id: impl Into<LayerId>, name: impl Into<String>, kind: LayerKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            visible: true,
            locked: false,
            expanded: false,
            children: Vec::new(),
            parent: None,
        }
    }

    /// Replace the children of this node
    pub fn with_children(mut self, children: Vec<LayerNode>) -> Self {
        self.children = children;
        self
    }

    /// Set the parent back-reference
    pub fn with_parent(mut self, parent: impl Into<LayerId>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Mark this node hidden
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Mark this node locked
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// Mark this node expanded
    pub fn expanded(mut self) -> Self {
        self.expanded = true;
        self
    }

    /// Check if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
