//! Positional line comparison and per-line change detection

use std::sync::LazyLock;

use regex::Regex;

use crate::{ChangeDetail, ChangeType, LineComparison, LineStatus};

/// Attribute tokens whose occurrence count is compared per line
const ATTRIBUTE_TOKENS: &[(&str, &str)] = &[
    ("class=\"", "Changed class attribute"),
    ("for=\"", "Changed for attribute"),
    ("onclick=\"", "Changed click event"),
    ("onchange=\"", "Changed change event"),
    ("style=\"", "Changed style attribute"),
];

// Literal pattern; Regex::new cannot fail on it.
static KEBAB_ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[0-9A-Za-z_]+-[0-9A-Za-z_]+=""#).expect("valid regex literal")
});

/// Split text into lines on `\n`; an empty text is a single empty line
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Classify every line position in `0..max(original.len(), converted.len())`
pub fn compare_lines(original: &[&str], converted: &[&str]) -> Vec<LineComparison> {
    let total = original.len().max(converted.len());

    (0..total)
        .map(|i| match (original.get(i), converted.get(i)) {
            (None, after) => {
                let after = after.copied().unwrap_or_default();
                LineComparison {
                    original_index: None,
                    converted_index: Some(i),
                    status: LineStatus::Added,
                    changes: vec![ChangeDetail::new(
                        ChangeType::Content,
                        "Line added during conversion",
                        "",
                        after,
                    )],
                }
            }
            (Some(before), None) => LineComparison {
                original_index: Some(i),
                converted_index: None,
                status: LineStatus::Removed,
                changes: vec![ChangeDetail::new(
                    ChangeType::Content,
                    "Line removed during conversion",
                    before,
                    "",
                )],
            },
            (Some(before), Some(after)) if before == after => LineComparison {
                original_index: Some(i),
                converted_index: Some(i),
                status: LineStatus::Unchanged,
                changes: Vec::new(),
            },
            (Some(before), Some(after)) => LineComparison {
                original_index: Some(i),
                converted_index: Some(i),
                status: LineStatus::Modified,
                changes: detect_line_changes(before, after),
            },
        })
        .collect()
}

/// Explain how `converted` differs from `original`
///
/// Checks run in a fixed order and every match is reported. Differing lines
/// with no recognized pattern get a single generic content detail; equal
/// lines get none.
pub fn detect_line_changes(original: &str, converted: &str) -> Vec<ChangeDetail> {
    let mut changes = Vec::new();
    let detail = |change_type: ChangeType, description: &'static str| {
        ChangeDetail::new(change_type, description, original, converted)
    };

    for &(token, description) in ATTRIBUTE_TOKENS {
        if original.matches(token).count() != converted.matches(token).count() {
            changes.push(detail(ChangeType::Attribute, description));
        }
    }

    if original.contains("<br>") && converted.contains("<br />") {
        changes.push(detail(ChangeType::Tag, "Converted to self-closing tag"));
    }
    if original.contains("<hr>") && converted.contains("<hr />") {
        changes.push(detail(ChangeType::Tag, "Converted to self-closing tag"));
    }
    if original.contains("<img") && !original.contains("/>") && converted.contains("/>") {
        changes.push(detail(ChangeType::Tag, "Converted img to self-closing"));
    }

    if original.contains("<!--") && converted.contains("{/*") {
        changes.push(detail(ChangeType::Comment, "Converted HTML comment to JSX"));
    }

    if KEBAB_ATTRIBUTE_RE.is_match(original) && !KEBAB_ATTRIBUTE_RE.is_match(converted) {
        changes.push(detail(ChangeType::Case, "Converted kebab-case to camelCase"));
    }

    if changes.is_empty() && original != converted {
        changes.push(detail(ChangeType::Content, "Line content modified"));
    }

    changes
}
