//! SwiftSwap HTML Parser
//!
//! Lenient HTML5 parsing built on html5ever, plus `innerHTML`-style
//! serialization back to markup. Parsing never fails: malformed input is
//! repaired the way a browser would (unclosed tags auto-closed, unknown tags
//! kept as generic elements).

mod parser;
mod serializer;

pub use parser::HtmlParser;
pub use serializer::HtmlSerializer;

use swiftswap_dom::{Document, DomError, DomTree, NodeId};

/// Markup adapter errors
#[derive(Debug, thiserror::Error)]
pub enum HtmlError {
    /// Fragment parsing needs an element as context
    #[error("node {0:?} is not an element")]
    NotAnElement(NodeId),

    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Parse an HTML string into a document
pub fn parse(html: &str) -> Document {
    HtmlParser::new().parse(html)
}

/// Serialized children of a node (`innerHTML`)
pub fn inner_html(tree: &DomTree, node: NodeId) -> String {
    HtmlSerializer::new().serialize_inner(tree, node)
}

/// Serialized node including itself (`outerHTML`)
pub fn outer_html(tree: &DomTree, node: NodeId) -> String {
    HtmlSerializer::new().serialize_outer(tree, node)
}

/// Replace the children of `node` with the parse of `markup`
///
/// The markup is parsed as a fragment in the context of `node`'s tag, so
/// table content assigned to a `<table>` keeps its `thead`/`tbody` shape.
pub fn set_inner_html(tree: &mut DomTree, node: NodeId, markup: &str) -> Result<(), HtmlError> {
    if tree.element(node).is_none() {
        return Err(HtmlError::NotAnElement(node));
    }
    tree.remove_children(node)?;
    HtmlParser::new().parse_fragment_into(tree, node, markup)
}
