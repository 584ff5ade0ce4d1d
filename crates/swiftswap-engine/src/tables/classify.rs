//! Table classification
//!
//! Tables are recognised by raw substrings of their `style` attribute (and
//! of the first cell's `style` for the two collapsed-border variants).
//! Matching is exact and textual; whitespace inside the signatures matters.

use swiftswap_dom::{DomTree, NodeId};

use super::transform::StickyPosition;

/// Present on every sticky-top table (head and body parts)
pub const FIXED_LAYOUT: &str = "table-layout:fixed";
/// Head table of a sticky-top group
pub const HEAD_BACKGROUND: &str = "background-color:#DE481D";
/// Body table of a sticky-top group (note the space after the colon)
pub const BODY_BACKGROUND: &str = "background-color: #F2F2F2";
/// Sticky-left / sticky-both tables
pub const COLLAPSED_BORDERS: &str = "border-collapse: collapse;";
/// Header colour on the first cell marks a sticky-both table
pub const HEADER_CELL_COLOR: &str = "#DE481D";

/// Class carried by every scroll wrapper
pub const WRAPPER_CLASS: &str = "table-scroll";

/// A sticky-top head table and the body tables merged into it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickyTopGroup {
    pub head: NodeId,
    pub body: Vec<NodeId>,
}

/// All tables of a document, partitioned by layout variant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableClassification {
    /// Already inside a scroll wrapper
    pub excluded: Vec<NodeId>,
    pub sticky_top: Vec<StickyTopGroup>,
    pub sticky_left: Vec<NodeId>,
    pub sticky_both: Vec<NodeId>,
    /// Body-style tables seen before any head table; left alone
    pub orphaned: Vec<NodeId>,
    /// Matched no signature
    pub passthrough: Vec<NodeId>,
}

impl TableClassification {
    /// Number of tables that will be restructured
    pub fn transform_count(&self) -> usize {
        self.sticky_top.len() + self.sticky_left.len() + self.sticky_both.len()
    }
}

/// Whether `table` already sits directly inside a scroll wrapper `<div>`
pub fn is_wrapped(tree: &DomTree, table: NodeId) -> bool {
    let Some(parent) = tree.parent_element(table) else {
        return false;
    };
    if !tree.element(parent).is_some_and(|elem| elem.is("div")) {
        return false;
    }
    let classes = tree.class_list(parent);
    classes.contains(WRAPPER_CLASS)
        && StickyPosition::ALL
            .iter()
            .any(|position| classes.contains(position.class_name()))
}

/// Classify every `<table>` under `root`, in document order
///
/// The checks are independent: a style carrying several signatures lands
/// in every matching category.
pub fn classify_tables(tree: &DomTree, root: NodeId) -> TableClassification {
    let mut result = TableClassification::default();

    for table in tree.get_elements_by_tag_name(root, "table") {
        if is_wrapped(tree, table) {
            result.excluded.push(table);
            continue;
        }

        let style = tree.attribute(table, "style").unwrap_or_default();
        let mut matched = false;

        if style.contains(FIXED_LAYOUT) {
            if style.contains(HEAD_BACKGROUND) {
                result.sticky_top.push(StickyTopGroup {
                    head: table,
                    body: Vec::new(),
                });
                matched = true;
            }
            if style.contains(BODY_BACKGROUND) {
                match result.sticky_top.last_mut() {
                    Some(group) => group.body.push(table),
                    None => result.orphaned.push(table),
                }
                matched = true;
            }
        }

        if style.contains(COLLAPSED_BORDERS) {
            let header_colored = tree
                .first_element_by_tag_name(table, "td")
                .and_then(|td| tree.attribute(td, "style"))
                .is_some_and(|cell_style| cell_style.contains(HEADER_CELL_COLOR));
            if header_colored {
                result.sticky_both.push(table);
            } else {
                result.sticky_left.push(table);
            }
            matched = true;
        }

        if !matched {
            result.passthrough.push(table);
        }
    }

    result
}
