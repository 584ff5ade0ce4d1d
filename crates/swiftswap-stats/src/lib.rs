//! SwiftSwap Statistics
//!
//! Positional line-by-line comparison of an original and a converted text,
//! and the aggregate report shown next to a conversion result.
//!
//! Lines are paired by index only (line `i` of the original against line `i`
//! of the output); there is no alignment search. The per-line change
//! detector is explanatory: whether a line counts as modified is decided by
//! plain string inequality.

mod calculator;
mod compare;

pub use calculator::{CharacterCount, ConversionStats, StatisticsCalculator};
pub use compare::{compare_lines, detect_line_changes, split_lines};

use serde::{Serialize, Serializer};

/// Classification of one aligned line position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStatus {
    Unchanged,
    Modified,
    Added,
    Removed,
}

/// Category of a detected change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Attribute,
    Tag,
    Comment,
    Case,
    Content,
}

/// One explanation of why a line differs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeDetail {
    #[serde(rename = "type")]
    pub change_type: ChangeType,
    pub description: String,
    pub before_text: String,
    pub after_text: String,
}

impl ChangeDetail {
    pub fn new(change_type: ChangeType, description: &str, before: &str, after: &str) -> Self {
        Self {
            change_type,
            description: description.to_string(),
            before_text: before.to_string(),
            after_text: after.to_string(),
        }
    }
}

/// Comparison result for one line position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineComparison {
    /// Index in the original text; `None` for added lines (serialized as -1)
    #[serde(serialize_with = "index_or_minus_one")]
    pub original_index: Option<usize>,
    /// Index in the converted text; `None` for removed lines (serialized as -1)
    #[serde(serialize_with = "index_or_minus_one")]
    pub converted_index: Option<usize>,
    pub status: LineStatus,
    pub changes: Vec<ChangeDetail>,
}

fn index_or_minus_one<S: Serializer>(index: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error> {
    match index {
        Some(i) => serializer.serialize_u64(*i as u64),
        None => serializer.serialize_i64(-1),
    }
}
