//! Document - High-level document API

use crate::{DomTree, NodeId};

/// HTML Document
#[derive(Debug, Clone)]
pub struct Document {
    /// The DOM tree
    tree: DomTree,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create an empty document (no structure)
    pub fn empty() -> Self {
        Self {
            tree: DomTree::new(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        }
    }

    /// Locate the html/head/body elements after the tree has been built
    pub fn finalize(&mut self) {
        let tree = &self.tree;
        self.html_element = tree
            .children(tree.root())
            .find(|(_, node)| node.as_element().is_some_and(|e| e.is("html")))
            .map_or(NodeId::NONE, |(id, _)| id);

        let child_named = |tag: &str| {
            tree.children(self.html_element)
                .find(|(_, node)| node.as_element().is_some_and(|e| e.is(tag)))
                .map_or(NodeId::NONE, |(id, _)| id)
        };
        self.head_element = child_named("head");
        self.body_element = child_named("body");
    }

    /// Get <html> element
    pub fn document_element(&self) -> Option<NodeId> {
        Some(self.html_element).filter(|id| id.is_valid())
    }

    /// Get <head> element
    pub fn head(&self) -> Option<NodeId> {
        Some(self.head_element).filter(|id| id.is_valid())
    }

    /// Get <body> element
    pub fn body(&self) -> Option<NodeId> {
        Some(self.body_element).filter(|id| id.is_valid())
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}
