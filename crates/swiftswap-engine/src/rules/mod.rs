//! Transformation rules and rule sets

mod presets;
mod registry;

pub use presets::builtin_rule_sets;
pub use registry::{RuleSet, RuleSetInfo, RuleSetRegistry, TransformResult};

use regex::{Captures, Regex};
use serde::Serialize;

use crate::tables::TableError;

/// What a rule changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    Attribute,
    Tag,
    Comment,
    Case,
}

/// Rule and rule set errors
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Rule set '{0}' not found")]
    UnknownRuleSet(String),

    #[error("invalid pattern for rule '{rule}': {source}")]
    Pattern {
        rule: &'static str,
        #[source]
        source: regex::Error,
    },

    /// Structural rewrite failed; the rule is skipped
    #[error("markup rewrite failed: {0}")]
    Markup(#[from] TableError),

    #[error("{0}")]
    Internal(String),
}

/// Markup-level rewrite function
pub type MarkupFn = fn(&str) -> Result<String, RuleError>;

enum RuleAction {
    /// Regex replace-all; the template uses `$1`/`${1}` group references
    Replace {
        pattern: Regex,
        replacement: &'static str,
    },
    /// `first-second="` becomes `firstSecond="`
    KebabToCamel { pattern: Regex },
    Markup(MarkupFn),
}

/// A single named text-to-text rewrite
pub struct TransformationRule {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: RuleCategory,
    action: RuleAction,
}

impl TransformationRule {
    /// Regex replace-all rule
    pub fn replace(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        category: RuleCategory,
        pattern: &str,
        replacement: &'static str,
    ) -> Result<Self, RuleError> {
        Ok(Self {
            id,
            name,
            description,
            category,
            action: RuleAction::Replace {
                pattern: compile(id, pattern)?,
                replacement,
            },
        })
    }

    /// Hyphenated attribute name to camelCase; `pattern` must capture the
    /// two name halves
    pub fn kebab_to_camel(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        pattern: &str,
    ) -> Result<Self, RuleError> {
        Ok(Self {
            id,
            name,
            description,
            category: RuleCategory::Case,
            action: RuleAction::KebabToCamel {
                pattern: compile(id, pattern)?,
            },
        })
    }

    /// Rule backed by a structural rewrite function
    pub fn markup(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        category: RuleCategory,
        rewrite: MarkupFn,
    ) -> Self {
        Self {
            id,
            name,
            description,
            category,
            action: RuleAction::Markup(rewrite),
        }
    }

    /// Apply this rule to the whole text
    pub fn apply(&self, input: &str) -> Result<String, RuleError> {
        match &self.action {
            RuleAction::Replace {
                pattern,
                replacement,
            } => Ok(pattern.replace_all(input, *replacement).into_owned()),
            RuleAction::KebabToCamel { pattern } => Ok(pattern
                .replace_all(input, |caps: &Captures<'_>| {
                    format!("{}{}=\"", &caps[1], capitalize(&caps[2]))
                })
                .into_owned()),
            RuleAction::Markup(rewrite) => rewrite(input),
        }
    }
}

impl std::fmt::Debug for TransformationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformationRule")
            .field("id", &self.id)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

fn compile(rule: &'static str, pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern).map_err(|source| RuleError::Pattern { rule, source })
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
