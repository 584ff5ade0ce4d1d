//! HTML5 Parser implementation
//!
//! Uses html5ever's built-in RcDom and converts it into the arena DOM.
//! Whitespace-only text is kept so that serialization reproduces the
//! input's layout.

use html5ever::tendril::TendrilSink;
use html5ever::{LocalName, Namespace, ParseOpts, QualName, parse_document, parse_fragment};
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use swiftswap_dom::{Document, DomResult, DomTree, NodeData, NodeId};

use crate::HtmlError;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// HTML5 parser
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Document {
        tracing::debug!(bytes = html.len(), "parsing HTML document");

        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);

        let mut document = Document::empty();
        let root = document.tree().root();
        if let Err(err) = self.convert_node(&dom.document, document.tree_mut(), root) {
            // Only reachable on an arena bug; keep whatever was built.
            tracing::warn!(%err, "failed to import parsed document");
        }
        document.finalize();

        tracing::debug!(nodes = document.tree().len(), "parsed HTML document");
        document
    }

    /// Parse `html` as a fragment in the context of `context` and append the
    /// resulting nodes to it
    pub fn parse_fragment_into(
        &self,
        tree: &mut DomTree,
        context: NodeId,
        html: &str,
    ) -> Result<(), HtmlError> {
        let tag = tree
            .tag_name(context)
            .ok_or(HtmlError::NotAnElement(context))?;
        let context_name = QualName::new(
            None,
            Namespace::from(HTML_NAMESPACE),
            LocalName::from(tag),
        );

        let dom = parse_fragment(
            RcDom::default(),
            ParseOpts::default(),
            context_name,
            Vec::new(),
            false,
        )
        .one(html);

        // Fragment parsing yields document -> synthetic <html> -> nodes.
        for synthetic_root in dom.document.children.borrow().iter() {
            for child in synthetic_root.children.borrow().iter() {
                self.convert_node(child, tree, context)?;
            }
        }
        Ok(())
    }

    /// Convert an RcDom node (and its subtree) into the arena under `parent`
    fn convert_node(&self, handle: &Handle, tree: &mut DomTree, parent: NodeId) -> DomResult<()> {
        match &handle.data {
            RcNodeData::Document => {
                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, parent)?;
                }
            }
            RcNodeData::Doctype {
                name,
                public_id,
                system_id,
            } => {
                let id = tree.create_node(NodeData::Doctype {
                    name: name.to_string(),
                    public_id: public_id.to_string(),
                    system_id: system_id.to_string(),
                });
                tree.append_child(parent, id)?;
            }
            RcNodeData::Text { contents } => {
                let id = tree.create_text(&contents.borrow());
                tree.append_child(parent, id)?;
            }
            RcNodeData::Comment { contents } => {
                let id = tree.create_comment(contents);
                tree.append_child(parent, id)?;
            }
            RcNodeData::Element {
                name,
                attrs,
                template_contents,
                ..
            } => {
                let id = tree.create_element(&name.local);
                for attr in attrs.borrow().iter() {
                    let attr_name = match &attr.name.prefix {
                        Some(prefix) => format!("{}:{}", prefix, attr.name.local),
                        None => attr.name.local.to_string(),
                    };
                    tree.set_attribute(id, &attr_name, &attr.value)?;
                }
                tree.append_child(parent, id)?;

                for child in handle.children.borrow().iter() {
                    self.convert_node(child, tree, id)?;
                }
                // <template> keeps its content in a separate fragment.
                if let Some(contents) = template_contents.borrow().as_ref() {
                    self.convert_node(contents, tree, id)?;
                }
            }
            RcNodeData::ProcessingInstruction { target, contents } => {
                let id = tree.create_node(NodeData::ProcessingInstruction {
                    target: target.to_string(),
                    data: contents.to_string(),
                });
                tree.append_child(parent, id)?;
            }
        }
        Ok(())
    }
}
