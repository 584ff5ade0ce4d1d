//! DOM Tree (arena-based allocation)
//!
//! Nodes are never freed: removing a node only unlinks it, and it stays in
//! the arena unreachable from the root. A tree lives for a single rewrite
//! request, so the arena is dropped as a whole.

use crate::{ClassList, DomError, DomResult, ElementData, Node, NodeData, NodeId};

/// Arena-based DOM tree
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document root
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    /// The document root
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the arena, detached ones included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, id: NodeId) -> DomResult<&Node> {
        self.get(id).ok_or(DomError::NotFound(id.0))
    }

    fn node_mut(&mut self, id: NodeId) -> DomResult<&mut Node> {
        self.get_mut(id).ok_or(DomError::NotFound(id.0))
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    // ------------------------------------------------------------------
    // Node creation
    // ------------------------------------------------------------------

    /// Create a detached element
    pub fn create_element(&mut self, name: &str) -> NodeId {
        self.push(Node::element(name))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content))
    }

    /// Create a detached comment
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push(Node::comment(content))
    }

    /// Create a detached node of any kind
    pub fn create_node(&mut self, data: NodeData) -> NodeId {
        self.push(Node::from_data(data))
    }

    // ------------------------------------------------------------------
    // Structure
    // ------------------------------------------------------------------

    /// Append `child` as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<()> {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` into `parent` before `reference` (or at the end)
    ///
    /// `child` is detached from its current position first.
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> DomResult<()> {
        if !self.node(parent)?.can_have_children() {
            return Err(DomError::InvalidNodeType {
                expected: "element or document",
            });
        }
        self.node(child)?;
        if child == NodeId::ROOT || self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest);
        }
        if let Some(reference) = reference {
            if self.node(reference)?.parent != parent {
                return Err(DomError::NotAChild(reference.0));
            }
            if reference == child {
                return Ok(());
            }
        }

        self.detach(child)?;

        let (prev, next) = match reference {
            Some(reference) => (self.nodes[reference.index()].prev_sibling, reference),
            None => (self.nodes[parent.index()].last_child, NodeId::NONE),
        };

        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = prev;
            node.next_sibling = next;
        }
        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = child;
        } else {
            self.nodes[parent.index()].last_child = child;
        }
        Ok(())
    }

    /// Unlink a node from its parent; a no-op for detached nodes
    pub fn detach(&mut self, id: NodeId) -> DomResult<()> {
        let (parent, prev, next) = {
            let node = self.node(id)?;
            (node.parent, node.prev_sibling, node.next_sibling)
        };
        if !parent.is_valid() {
            return Ok(());
        }

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
        Ok(())
    }

    /// Detach every child of `id`
    pub fn remove_children(&mut self, id: NodeId) -> DomResult<()> {
        loop {
            let first = self.node(id)?.first_child;
            if !first.is_valid() {
                return Ok(());
            }
            self.detach(first)?;
        }
    }

    /// Insert `wrapper` as the immediate parent of `id`
    ///
    /// The wrapper takes the node's place among its siblings. Returns
    /// `false` without touching anything when `id` has no parent.
    pub fn wrap(&mut self, id: NodeId, wrapper: NodeId) -> DomResult<bool> {
        let parent = self.node(id)?.parent;
        if !parent.is_valid() {
            return Ok(false);
        }
        self.insert_before(parent, wrapper, Some(id))?;
        self.append_child(wrapper, id)?;
        Ok(true)
    }

    // ------------------------------------------------------------------
    // Traversal and queries
    // ------------------------------------------------------------------

    /// Parent of a node, if attached
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id)
            .map(|node| node.parent)
            .filter(|parent| parent.is_valid())
    }

    /// Parent of a node if it is an element
    pub fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        self.parent(id)
            .filter(|&parent| self.get(parent).is_some_and(Node::is_element))
    }

    /// Iterate the direct children of a node
    pub fn children(&self, id: NodeId) -> Children<'_> {
        let next = self.get(id).map_or(NodeId::NONE, |node| node.first_child);
        Children { tree: self, next }
    }

    /// All descendants of `root` in document (pre-order) order, root excluded
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = Vec::new();
        self.push_children_reversed(root, &mut stack);
        while let Some(id) = stack.pop() {
            out.push(id);
            self.push_children_reversed(id, &mut stack);
        }
        out
    }

    // Last child first, so pops come out in document order.
    fn push_children_reversed(&self, id: NodeId, stack: &mut Vec<NodeId>) {
        let mut child = self.get(id).map_or(NodeId::NONE, |node| node.last_child);
        while child.is_valid() {
            stack.push(child);
            child = self.nodes[child.index()].prev_sibling;
        }
    }

    /// Whether `ancestor` is `id` or one of its ancestors
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = id;
        while current.is_valid() {
            if current == ancestor {
                return true;
            }
            current = match self.get(current) {
                Some(node) => node.parent,
                None => return false,
            };
        }
        false
    }

    /// Descendant elements with the given tag name, in document order
    pub fn get_elements_by_tag_name(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&id| self.element(id).is_some_and(|elem| elem.is(tag)))
            .collect()
    }

    /// First descendant element with the given tag name
    pub fn first_element_by_tag_name(&self, root: NodeId, tag: &str) -> Option<NodeId> {
        self.get_elements_by_tag_name(root, tag).into_iter().next()
    }

    // ------------------------------------------------------------------
    // Element data
    // ------------------------------------------------------------------

    /// Element data for `id`, if it is an element
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    fn element_mut(&mut self, id: NodeId) -> DomResult<&mut ElementData> {
        self.node_mut(id)?
            .as_element_mut()
            .ok_or(DomError::InvalidNodeType { expected: "element" })
    }

    /// Lowercase tag name of an element
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|elem| elem.name.as_str())
    }

    /// Attribute value on an element
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|elem| elem.get_attr(name))
    }

    /// Set an attribute on an element
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.element_mut(id)?.set_attr(name, value);
        Ok(())
    }

    /// Remove an attribute from an element, returning the old value
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> DomResult<Option<String>> {
        Ok(self.element_mut(id)?.remove_attr(name))
    }

    /// Class tokens of an element (empty for non-elements)
    pub fn class_list(&self, id: NodeId) -> ClassList {
        self.attribute(id, "class")
            .map(ClassList::from_string)
            .unwrap_or_default()
    }

    /// Replace the `class` attribute with a raw class string
    pub fn set_class_name(&mut self, id: NodeId, class_name: &str) -> DomResult<()> {
        self.set_attribute(id, "class", class_name)
    }

    /// Write a class list back as the `class` attribute
    pub fn set_class_list(&mut self, id: NodeId, classes: &ClassList) -> DomResult<()> {
        self.set_class_name(id, &classes.value())
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the direct children of a node
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.next.is_valid() {
            return None;
        }
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build() -> (DomTree, NodeId, NodeId, NodeId) {
        let mut tree = DomTree::new();
        let div = tree.create_element("div");
        let a = tree.create_element("span");
        let b = tree.create_element("span");
        tree.append_child(tree.root(), div).unwrap();
        tree.append_child(div, a).unwrap();
        tree.append_child(div, b).unwrap();
        (tree, div, a, b)
    }

    #[test]
    fn test_append_and_children() {
        let (tree, div, a, b) = build();
        let kids: Vec<_> = tree.children(div).map(|(id, _)| id).collect();
        assert_eq!(kids, [a, b]);
        assert_eq!(tree.parent(a), Some(div));
        assert_eq!(tree.parent_element(div), None);
    }

    #[test]
    fn test_insert_before() {
        let (mut tree, div, a, b) = build();
        let c = tree.create_element("em");
        tree.insert_before(div, c, Some(b)).unwrap();
        let kids: Vec<_> = tree.children(div).map(|(id, _)| id).collect();
        assert_eq!(kids, [a, c, b]);
    }

    #[test]
    fn test_cycle_rejected() {
        let (mut tree, div, a, _) = build();
        assert_eq!(tree.append_child(a, div), Err(DomError::HierarchyRequest));
        assert_eq!(tree.append_child(a, a), Err(DomError::HierarchyRequest));
    }

    #[test]
    fn test_detach_middle() {
        let (mut tree, div, a, b) = build();
        let c = tree.create_element("em");
        tree.append_child(div, c).unwrap();
        tree.detach(b).unwrap();
        let kids: Vec<_> = tree.children(div).map(|(id, _)| id).collect();
        assert_eq!(kids, [a, c]);
        assert_eq!(tree.parent(b), None);
        // detaching twice is harmless
        tree.detach(b).unwrap();
    }

    #[test]
    fn test_insert_before_wrong_parent() {
        let (mut tree, _, a, b) = build();
        let em = tree.create_element("em");
        assert_eq!(tree.insert_before(a, em, Some(b)), Err(DomError::NotAChild(b.0)));
    }

    #[test]
    fn test_wrap() {
        let (mut tree, div, a, b) = build();
        let wrapper = tree.create_element("section");
        assert!(tree.wrap(a, wrapper).unwrap());
        let kids: Vec<_> = tree.children(div).map(|(id, _)| id).collect();
        assert_eq!(kids, [wrapper, b]);
        assert_eq!(tree.parent(a), Some(wrapper));
    }

    #[test]
    fn test_wrap_detached_is_noop() {
        let mut tree = DomTree::new();
        let lone = tree.create_element("table");
        let wrapper = tree.create_element("div");
        assert!(!tree.wrap(lone, wrapper).unwrap());
        assert_eq!(tree.parent(wrapper), None);
    }

    #[test]
    fn test_descendants_preorder() {
        let (mut tree, div, a, b) = build();
        let inner = tree.create_text("x");
        tree.append_child(a, inner).unwrap();
        let tail = tree.create_element("p");
        tree.append_child(tree.root(), tail).unwrap();
        assert_eq!(tree.descendants(tree.root()), [div, a, inner, b, tail]);
        assert_eq!(tree.descendants(div), [a, inner, b]);
    }

    #[test]
    fn test_get_elements_by_tag_name_case_insensitive() {
        let (tree, _, a, b) = build();
        assert_eq!(tree.get_elements_by_tag_name(tree.root(), "SPAN"), [a, b]);
        assert_eq!(tree.first_element_by_tag_name(tree.root(), "table"), None);
    }

    #[test]
    fn test_class_list_round_trip() {
        let (mut tree, div, _, _) = build();
        tree.set_class_name(div, "table-scroll  sticky-top").unwrap();
        let classes = tree.class_list(div);
        assert!(classes.contains("table-scroll"));
        assert!(classes.contains("sticky-top"));
        tree.remove_attribute(div, "class").unwrap();
        assert!(tree.class_list(div).is_empty());
    }

    #[test]
    fn test_set_attribute_on_text_fails() {
        let mut tree = DomTree::new();
        let text = tree.create_text("x");
        assert!(tree.set_attribute(text, "class", "a").is_err());
    }
}
