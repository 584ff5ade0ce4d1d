//! SwiftSwap Engine
//!
//! Rewrites HTML snippets with named rule sets: structural table
//! restructuring (`table`) and regex-driven template dialects (`react`,
//! `vue`, `angular`, `webcomponents`), plus a line-diff report on the result.
//!
//! # Example
//! ```rust
//! use swiftswap_engine::{apply_rule_set, compute_stats};
//!
//! let input = r#"<label class="x" for="y">Name</label>"#;
//! let result = apply_rule_set(input, "react");
//! assert!(result.success);
//! assert_eq!(result.result, r#"<label className="x" htmlFor="y">Name</label>"#);
//!
//! let stats = compute_stats(input, &result.result, "react", None);
//! assert_eq!(stats.rule_set_applied, "React/JSX");
//! ```

mod config;
mod converter;
pub mod rules;
pub mod tables;

pub use config::Config;
pub use converter::{Conversion, Converter};
pub use rules::{
    RuleCategory, RuleError, RuleSet, RuleSetInfo, RuleSetRegistry, TransformResult,
    TransformationRule,
};
pub use swiftswap_stats::{ChangeDetail, ChangeType, ConversionStats, LineComparison, LineStatus};
pub use tables::{TableError, transform_tables};

use std::time::Duration;

use swiftswap_stats::StatisticsCalculator;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Apply the built-in rule set `rule_set_id` to `input`
///
/// Never panics on bad input: unknown ids and internal failures come back as
/// `success: false` with an error message.
pub fn apply_rule_set(input: &str, rule_set_id: &str) -> TransformResult {
    if input.trim().is_empty() {
        return TransformResult::success(String::new(), 0, rule_set_id);
    }
    match RuleSetRegistry::global() {
        Ok(registry) => registry.apply(input, rule_set_id),
        Err(err) => TransformResult::failure(err.to_string(), rule_set_id),
    }
}

/// Line-diff statistics for a conversion done with `rule_set_id`
///
/// `processing_time` is recorded as given; pass `None` to have the
/// statistics pass time itself.
pub fn compute_stats(
    original: &str,
    converted: &str,
    rule_set_id: &str,
    processing_time: Option<Duration>,
) -> ConversionStats {
    StatisticsCalculator::new().calculate(
        original,
        converted,
        rule_set_display_name(rule_set_id),
        processing_time,
    )
}

/// Display name of a built-in rule set, or `Unknown`
pub fn rule_set_display_name(rule_set_id: &str) -> &'static str {
    RuleSetRegistry::global().map_or("Unknown", |registry| registry.display_name(rule_set_id))
}

/// Metadata of every built-in rule set, in listing order
pub fn list_rule_sets() -> Vec<RuleSetInfo> {
    RuleSetRegistry::global()
        .map(RuleSetRegistry::list)
        .unwrap_or_default()
}

/// Built-in rule set by id
pub fn get_rule_set(rule_set_id: &str) -> Option<&'static RuleSet> {
    RuleSetRegistry::global()
        .ok()
        .and_then(|registry| registry.get(rule_set_id))
}
