//! Table transfer
//!
//! Rewrites legacy inline-styled tables into scroll-wrapped tables with
//! sticky headers and/or a sticky first column:
//!
//! - **sticky-top**: a head table followed by one or more body tables, merged
//!   into a single table with a `<thead>` row
//! - **sticky-left**: cells restyled in place, first column pinned
//! - **sticky-both**: first row promoted to the header, first column pinned
//!
//! Tables already inside a scroll wrapper are left untouched, so running the
//! transform on its own output changes nothing.

mod classify;
mod transform;

pub use classify::{StickyTopGroup, TableClassification, classify_tables, is_wrapped};
pub use transform::{
    StickyPosition, transform_sticky_both, transform_sticky_left, transform_sticky_top, wrap_table,
};

use swiftswap_dom::DomError;
use swiftswap_html::{HtmlError, inner_html};

/// Table transfer errors
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("parsed document has no body element")]
    MissingBody,

    #[error(transparent)]
    Html(#[from] HtmlError),

    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Transform every recognised table in `input`
///
/// Never fails: on any error the input is returned unchanged.
pub fn transform_tables(input: &str) -> String {
    match try_transform_tables(input) {
        Ok(output) => output,
        Err(err) => {
            tracing::warn!(error = %err, "table transfer failed; returning input unchanged");
            input.to_string()
        }
    }
}

/// Transform every recognised table in `input`, reporting failures
///
/// The result is the serialized body content of the rewritten document, or
/// the input itself when that content is empty.
pub fn try_transform_tables(input: &str) -> Result<String, TableError> {
    let mut document = swiftswap_html::parse(input);
    let body = document.body().ok_or(TableError::MissingBody)?;
    let tree = document.tree_mut();

    let classification = classify_tables(tree, tree.root());
    tracing::debug!(
        sticky_top = classification.sticky_top.len(),
        sticky_left = classification.sticky_left.len(),
        sticky_both = classification.sticky_both.len(),
        excluded = classification.excluded.len(),
        orphaned = classification.orphaned.len(),
        "classified tables"
    );

    for group in &classification.sticky_top {
        transform_sticky_top(tree, group)?;
    }
    for &table in &classification.sticky_left {
        transform_sticky_left(tree, table)?;
    }
    for &table in &classification.sticky_both {
        transform_sticky_both(tree, table)?;
    }

    let output = inner_html(tree, body);
    if output.is_empty() {
        Ok(input.to_string())
    } else {
        Ok(output)
    }
}
