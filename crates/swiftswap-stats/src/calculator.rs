//! Aggregate conversion statistics

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::{ChangeType, LineComparison, LineStatus, compare_lines, split_lines};

/// Character totals of the two full texts, in UTF-16 code units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharacterCount {
    pub before: usize,
    pub after: usize,
}

/// Statistics report for one conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionStats {
    pub total_lines: usize,
    pub modified_lines: usize,
    pub unchanged_lines: usize,
    pub lines_added: usize,
    pub lines_removed: usize,
    pub attribute_changes: usize,
    pub tag_modifications: usize,
    pub comment_conversions: usize,
    pub case_conversions: usize,
    /// Share of untouched lines, in percent
    pub conversion_accuracy: f64,
    /// Milliseconds
    #[serde(rename = "processingTime")]
    pub processing_time_ms: f64,
    /// Display name of the rule set
    pub rule_set_applied: String,
    pub character_count: CharacterCount,
}

/// Builds [`ConversionStats`] from an original/converted text pair
#[derive(Debug, Clone, Copy)]
pub struct StatisticsCalculator {
    /// Decimal places kept in the accuracy figure
    precision: u32,
}

impl StatisticsCalculator {
    pub fn new() -> Self {
        Self { precision: 2 }
    }

    pub fn with_precision(precision: u32) -> Self {
        Self { precision }
    }

    /// Compute the report
    ///
    /// `processing_time` is the caller's measurement of the conversion and
    /// is recorded as given; when it is `None` or zero the calculator's own
    /// run time is reported instead.
    pub fn calculate(
        &self,
        original: &str,
        converted: &str,
        rule_set_label: &str,
        processing_time: Option<Duration>,
    ) -> ConversionStats {
        let started = Instant::now();

        let original_lines = split_lines(original);
        let converted_lines = split_lines(converted);
        let comparisons = compare_lines(&original_lines, &converted_lines);

        let total_lines = original_lines.len().max(converted_lines.len());
        let count = |status| comparisons.iter().filter(|c| c.status == status).count();
        let modified_lines = count(LineStatus::Modified);
        let unchanged_lines = count(LineStatus::Unchanged);
        let lines_added = count(LineStatus::Added);
        let lines_removed = count(LineStatus::Removed);

        let categories = CategoryCounts::from_comparisons(&comparisons);

        let total_changes = modified_lines + lines_added + lines_removed;
        let accuracy = if total_lines > 0 {
            (total_lines - total_changes) as f64 / total_lines as f64 * 100.0
        } else {
            100.0
        };

        let processing_time = processing_time
            .filter(|elapsed| !elapsed.is_zero())
            .unwrap_or_else(|| started.elapsed());

        tracing::debug!(
            total_lines,
            modified_lines,
            lines_added,
            lines_removed,
            "computed conversion statistics"
        );

        ConversionStats {
            total_lines,
            modified_lines,
            unchanged_lines,
            lines_added,
            lines_removed,
            attribute_changes: categories.attribute,
            tag_modifications: categories.tag,
            comment_conversions: categories.comment,
            case_conversions: categories.case,
            conversion_accuracy: self.round(accuracy),
            processing_time_ms: processing_time.as_nanos() as f64 / 1_000_000.0,
            rule_set_applied: rule_set_label.to_string(),
            character_count: CharacterCount {
                before: original.encode_utf16().count(),
                after: converted.encode_utf16().count(),
            },
        }
    }

    fn round(&self, value: f64) -> f64 {
        let factor = 10f64.powi(self.precision as i32);
        (value * factor).round() / factor
    }
}

impl Default for StatisticsCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
struct CategoryCounts {
    attribute: usize,
    tag: usize,
    comment: usize,
    case: usize,
}

impl CategoryCounts {
    fn from_comparisons(comparisons: &[LineComparison]) -> Self {
        let mut counts = Self::default();
        for change in comparisons.iter().flat_map(|c| &c.changes) {
            match change.change_type {
                ChangeType::Attribute => counts.attribute += 1,
                ChangeType::Tag => counts.tag += 1,
                ChangeType::Comment => counts.comment += 1,
                ChangeType::Case => counts.case += 1,
                ChangeType::Content => {}
            }
        }
        counts
    }
}
