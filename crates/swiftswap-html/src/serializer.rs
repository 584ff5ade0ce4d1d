//! HTML Serialization (innerHTML/outerHTML)
//!
//! Follows the HTML fragment serialization algorithm, so output matches what
//! a browser's `innerHTML` would return for the same tree:
//! - attributes in stored order, always with a quoted value
//! - void elements written without an end tag
//! - raw-text element content written verbatim

use swiftswap_dom::{DomTree, NodeData, NodeId};

/// Void elements (no end tag, no children)
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "embed", "frame", "hr", "img", "input",
    "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Elements whose text children are not escaped
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "iframe", "noembed", "noframes", "noscript", "plaintext", "script", "style", "xmp",
];

/// HTML serializer
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSerializer;

impl HtmlSerializer {
    pub fn new() -> Self {
        Self
    }

    /// Serialize innerHTML of a node (children only)
    pub fn serialize_inner(&self, tree: &DomTree, node_id: NodeId) -> String {
        let mut output = String::new();
        self.serialize_children(tree, node_id, &mut output);
        output
    }

    /// Serialize outerHTML of a node (including the node itself)
    pub fn serialize_outer(&self, tree: &DomTree, node_id: NodeId) -> String {
        let mut output = String::new();
        self.serialize_node(tree, node_id, &mut output);
        output
    }

    /// Serialize a node and its descendants
    fn serialize_node(&self, tree: &DomTree, node_id: NodeId, output: &mut String) {
        let Some(node) = tree.get(node_id) else {
            return;
        };

        match &node.data {
            NodeData::Document => {
                self.serialize_children(tree, node_id, output);
            }
            NodeData::Element(elem) => {
                let tag = elem.name.as_str();

                output.push('<');
                output.push_str(tag);
                for attr in &elem.attrs {
                    output.push(' ');
                    output.push_str(&attr.name);
                    output.push_str("=\"");
                    escape_attribute(&attr.value, output);
                    output.push('"');
                }
                output.push('>');

                if VOID_ELEMENTS.contains(&tag) {
                    return;
                }

                if RAW_TEXT_ELEMENTS.contains(&tag) {
                    self.serialize_children_raw(tree, node_id, output);
                } else {
                    self.serialize_children(tree, node_id, output);
                }

                output.push_str("</");
                output.push_str(tag);
                output.push('>');
            }
            NodeData::Text(text) => {
                escape_text(text, output);
            }
            NodeData::Comment(text) => {
                output.push_str("<!--");
                output.push_str(text);
                output.push_str("-->");
            }
            NodeData::Doctype { name, .. } => {
                output.push_str("<!DOCTYPE ");
                output.push_str(name);
                output.push('>');
            }
            NodeData::ProcessingInstruction { target, data } => {
                output.push_str("<?");
                output.push_str(target);
                output.push(' ');
                output.push_str(data);
                output.push('>');
            }
        }
    }

    fn serialize_children(&self, tree: &DomTree, parent_id: NodeId, output: &mut String) {
        for (child_id, _) in tree.children(parent_id) {
            self.serialize_node(tree, child_id, output);
        }
    }

    fn serialize_children_raw(&self, tree: &DomTree, parent_id: NodeId, output: &mut String) {
        for (child_id, child) in tree.children(parent_id) {
            match child.as_text() {
                Some(text) => output.push_str(text),
                None => self.serialize_node(tree, child_id, output),
            }
        }
    }
}

/// Escape text content for HTML
fn escape_text(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '\u{a0}' => output.push_str("&nbsp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

/// Escape attribute value
fn escape_attribute(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '\u{a0}' => output.push_str("&nbsp;"),
            '"' => output.push_str("&quot;"),
            _ => output.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with(build: impl FnOnce(&mut DomTree, NodeId)) -> DomTree {
        let mut tree = DomTree::new();
        let root = tree.root();
        build(&mut tree, root);
        tree
    }

    #[test]
    fn test_void_element_has_no_end_tag() {
        let tree = tree_with(|tree, root| {
            let br = tree.create_element("br");
            tree.append_child(root, br).unwrap();
        });
        assert_eq!(HtmlSerializer::new().serialize_inner(&tree, tree.root()), "<br>");
    }

    #[test]
    fn test_attributes_in_order_and_escaped() {
        let tree = tree_with(|tree, root| {
            let td = tree.create_element("td");
            tree.set_attribute(td, "title", "a \"b\" & c").unwrap();
            tree.set_attribute(td, "hidden", "").unwrap();
            tree.append_child(root, td).unwrap();
        });
        assert_eq!(
            HtmlSerializer::new().serialize_inner(&tree, tree.root()),
            r#"<td title="a &quot;b&quot; &amp; c" hidden=""></td>"#
        );
    }

    #[test]
    fn test_text_escaping() {
        let tree = tree_with(|tree, root| {
            let p = tree.create_element("p");
            let text = tree.create_text("1 < 2 & 3 > 2\u{a0}");
            tree.append_child(root, p).unwrap();
            tree.append_child(p, text).unwrap();
        });
        assert_eq!(
            HtmlSerializer::new().serialize_inner(&tree, tree.root()),
            "<p>1 &lt; 2 &amp; 3 &gt; 2&nbsp;</p>"
        );
    }

    #[test]
    fn test_raw_text_not_escaped() {
        let tree = tree_with(|tree, root| {
            let style = tree.create_element("style");
            let text = tree.create_text("td > p { color: red }");
            tree.append_child(root, style).unwrap();
            tree.append_child(style, text).unwrap();
        });
        assert_eq!(
            HtmlSerializer::new().serialize_inner(&tree, tree.root()),
            "<style>td > p { color: red }</style>"
        );
    }

    #[test]
    fn test_comment_and_outer() {
        let tree = tree_with(|tree, root| {
            let div = tree.create_element("div");
            let comment = tree.create_comment(" note ");
            tree.append_child(root, div).unwrap();
            tree.append_child(div, comment).unwrap();
        });
        let div = tree.first_element_by_tag_name(tree.root(), "div").unwrap();
        assert_eq!(HtmlSerializer::new().serialize_outer(&tree, div), "<div><!-- note --></div>");
        assert_eq!(HtmlSerializer::new().serialize_inner(&tree, div), "<!-- note -->");
    }
}
