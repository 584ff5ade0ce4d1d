//! SwiftSwap DOM - Document Object Model
//!
//! Arena-based, mutable DOM tree used by the markup rewriting pipeline.
//! Every node lives in a single `Vec` owned by [`DomTree`]; links between
//! nodes are [`NodeId`] indices, so a node has at most one parent and the
//! tree cannot share ownership.

mod classlist;
mod document;
mod node;
mod operations;
mod tree;

pub use classlist::ClassList;
pub use document::Document;
pub use node::{Attribute, ElementData, Node, NodeData};
pub use operations::{DomError, DomResult};
pub use tree::{Children, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);

    /// Sentinel for "no node" in sibling/parent links
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Whether this ID refers to a node rather than the sentinel
    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}
