//! Rule set registry and application

use std::sync::OnceLock;

use serde::Serialize;

use super::{RuleError, TransformationRule, builtin_rule_sets};

static BUILTIN: OnceLock<Result<RuleSetRegistry, RuleError>> = OnceLock::new();

/// An ordered, named group of rules
#[derive(Debug)]
pub struct RuleSet {
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub rules: Vec<TransformationRule>,
}

impl RuleSet {
    pub fn info(&self) -> RuleSetInfo {
        RuleSetInfo {
            id: self.id,
            display_name: self.display_name,
            description: self.description,
            icon: self.icon,
        }
    }
}

/// Display metadata of a rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSetInfo {
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Outcome of applying a rule set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformResult {
    pub success: bool,
    pub result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Rules whose output differed from their input
    pub applied_rules: usize,
    pub rule_set_used: String,
}

impl TransformResult {
    pub fn success(result: String, applied_rules: usize, rule_set_id: &str) -> Self {
        Self {
            success: true,
            result,
            error: None,
            applied_rules,
            rule_set_used: rule_set_id.to_string(),
        }
    }

    pub fn failure(error: String, rule_set_id: &str) -> Self {
        Self {
            success: false,
            result: String::new(),
            error: Some(error),
            applied_rules: 0,
            rule_set_used: rule_set_id.to_string(),
        }
    }
}

/// Lookup table of rule sets by id
#[derive(Debug)]
pub struct RuleSetRegistry {
    rule_sets: Vec<RuleSet>,
}

impl RuleSetRegistry {
    pub fn new(rule_sets: Vec<RuleSet>) -> Self {
        Self { rule_sets }
    }

    /// Registry holding the built-in rule sets
    pub fn builtin() -> Result<Self, RuleError> {
        builtin_rule_sets().map(Self::new)
    }

    /// Process-wide built-in registry, built on first use
    pub fn global() -> Result<&'static Self, &'static RuleError> {
        BUILTIN.get_or_init(Self::builtin).as_ref()
    }

    pub fn get(&self, id: &str) -> Option<&RuleSet> {
        self.rule_sets.iter().find(|set| set.id == id)
    }

    /// Display metadata of every rule set, in registration order
    pub fn list(&self) -> Vec<RuleSetInfo> {
        self.rule_sets.iter().map(RuleSet::info).collect()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rule_sets.iter().map(|set| set.id)
    }

    /// Display name for `id`, or `Unknown`
    pub fn display_name(&self, id: &str) -> &'static str {
        self.get(id).map_or("Unknown", |set| set.display_name)
    }

    /// Run every rule of `rule_set_id` over `input`, in order
    ///
    /// Empty or whitespace-only input succeeds with an empty result before
    /// the id is looked up.
    pub fn apply(&self, input: &str, rule_set_id: &str) -> TransformResult {
        if input.trim().is_empty() {
            return TransformResult::success(String::new(), 0, rule_set_id);
        }

        match self.run(input, rule_set_id) {
            Ok((result, applied_rules)) => {
                tracing::debug!(rule_set = rule_set_id, applied_rules, "applied rule set");
                TransformResult::success(result, applied_rules, rule_set_id)
            }
            Err(err) => {
                tracing::warn!(rule_set = rule_set_id, error = %err, "rule set failed");
                TransformResult::failure(err.to_string(), rule_set_id)
            }
        }
    }

    fn run(&self, input: &str, rule_set_id: &str) -> Result<(String, usize), RuleError> {
        let rule_set = self
            .get(rule_set_id)
            .ok_or_else(|| RuleError::UnknownRuleSet(rule_set_id.to_string()))?;

        let mut text = input.to_string();
        let mut applied = 0;

        for rule in &rule_set.rules {
            let next = match rule.apply(&text) {
                Ok(next) => next,
                Err(RuleError::Markup(err)) => {
                    tracing::warn!(rule = rule.id, error = %err, "rule skipped");
                    continue;
                }
                Err(err) => return Err(err),
            };
            if next != text {
                applied += 1;
                text = next;
            }
        }

        Ok((text, applied))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleCategory;
    use crate::tables::TableError;

    fn registry(rules: Vec<TransformationRule>) -> RuleSetRegistry {
        RuleSetRegistry::new(vec![RuleSet {
            id: "custom",
            display_name: "Custom",
            description: "",
            icon: "",
            rules,
        }])
    }

    #[test]
    fn test_empty_input_short_circuits() {
        let registry = registry(Vec::new());
        let result = registry.apply(" \n\t", "missing");
        assert!(result.success);
        assert_eq!(result.result, "");
        assert_eq!(result.applied_rules, 0);
        assert_eq!(result.rule_set_used, "missing");
    }

    #[test]
    fn test_unknown_rule_set() {
        let result = registry(Vec::new()).apply("<p>", "svelte");
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Rule set 'svelte' not found"));
        assert_eq!(result.result, "");
    }

    #[test]
    fn test_counts_only_rules_that_change_text() {
        let registry = registry(vec![
            TransformationRule::replace("a", "a", "", RuleCategory::Tag, "x", "y").unwrap(),
            TransformationRule::replace("b", "b", "", RuleCategory::Tag, "zzz", "q").unwrap(),
            TransformationRule::replace("c", "c", "", RuleCategory::Tag, "y", "w").unwrap(),
        ]);
        let result = registry.apply("xx", "custom");
        assert!(result.success);
        assert_eq!(result.result, "ww");
        assert_eq!(result.applied_rules, 2);
    }

    #[test]
    fn test_markup_error_skips_only_that_rule() {
        let registry = registry(vec![
            TransformationRule::markup("broken", "", "", RuleCategory::Tag, |_| {
                Err(RuleError::Markup(TableError::MissingBody))
            }),
            TransformationRule::replace("a", "a", "", RuleCategory::Tag, "x", "y").unwrap(),
        ]);
        let result = registry.apply("x", "custom");
        assert!(result.success);
        assert_eq!(result.result, "y");
        assert_eq!(result.applied_rules, 1);
    }

    #[test]
    fn test_internal_error_fails_whole_request() {
        let registry = registry(vec![
            TransformationRule::replace("a", "a", "", RuleCategory::Tag, "x", "y").unwrap(),
            TransformationRule::markup("boom", "", "", RuleCategory::Tag, |_| {
                Err(RuleError::Internal("rule exploded".to_string()))
            }),
        ]);
        let result = registry.apply("x", "custom");
        assert!(!result.success);
        assert_eq!(result.result, "");
        assert_eq!(result.applied_rules, 0);
        assert_eq!(result.error.as_deref(), Some("rule exploded"));
    }

    #[test]
    fn test_display_name_fallback() {
        let registry = registry(Vec::new());
        assert_eq!(registry.display_name("custom"), "Custom");
        assert_eq!(registry.display_name("nope"), "Unknown");
    }

    #[test]
    fn test_global_registry_lists_builtins() {
        let registry = RuleSetRegistry::global().unwrap();
        let ids: Vec<_> = registry.ids().collect();
        assert_eq!(ids, ["table", "react", "vue", "angular", "webcomponents"]);
        assert_eq!(registry.list()[0].icon, "📊");
    }
}
