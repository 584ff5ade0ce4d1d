//! One-shot conversion: apply a rule set, then report on the result

use std::time::Instant;

use serde::Serialize;
use swiftswap_stats::{ConversionStats, StatisticsCalculator};

use crate::Config;
use crate::rules::{RuleError, RuleSetRegistry, TransformResult};

/// Result of [`Converter::convert`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub transform: TransformResult,
    /// Present only when the transform succeeded
    pub stats: Option<ConversionStats>,
}

/// Applies rule sets from a registry and computes statistics
#[derive(Debug)]
pub struct Converter<'r> {
    config: Config,
    registry: &'r RuleSetRegistry,
    calculator: StatisticsCalculator,
}

impl<'r> Converter<'r> {
    pub fn new(config: Config, registry: &'r RuleSetRegistry) -> Self {
        let calculator = StatisticsCalculator::with_precision(config.accuracy_precision);
        Self {
            config,
            registry,
            calculator,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Convert `input` with the rule set `rule_set_id`
    ///
    /// The statistics carry the measured duration of the transform itself.
    pub fn convert(&self, input: &str, rule_set_id: &str) -> Conversion {
        let started = Instant::now();
        let transform = self.registry.apply(input, rule_set_id);
        let elapsed = started.elapsed();

        let stats = transform.success.then(|| {
            self.calculator.calculate(
                input,
                &transform.result,
                self.registry.display_name(rule_set_id),
                Some(elapsed),
            )
        });

        Conversion { transform, stats }
    }

    /// Convert `input` with the configured default rule set
    pub fn convert_default(&self, input: &str) -> Conversion {
        self.convert(input, &self.config.default_rule_set)
    }
}

impl Converter<'static> {
    /// Converter over the process-wide built-in registry
    pub fn builtin(config: Config) -> Result<Self, &'static RuleError> {
        RuleSetRegistry::global().map(|registry| Self::new(config, registry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_reports_stats_on_success() {
        let converter = Converter::builtin(Config::default()).unwrap();
        let conversion = converter.convert(r#"<div class="foo">"#, "react");

        assert!(conversion.transform.success);
        assert_eq!(conversion.transform.result, r#"<div className="foo">"#);
        let stats = conversion.stats.unwrap();
        assert_eq!(stats.rule_set_applied, "React/JSX");
        assert_eq!(stats.modified_lines, 1);
        assert_eq!(stats.attribute_changes, 1);
    }

    #[test]
    fn test_convert_failure_has_no_stats() {
        let converter = Converter::builtin(Config::default()).unwrap();
        let conversion = converter.convert("<p>", "svelte");
        assert!(!conversion.transform.success);
        assert!(conversion.stats.is_none());
    }

    #[test]
    fn test_precision_from_config() {
        let config = Config {
            accuracy_precision: 0,
            ..Config::default()
        };
        let converter = Converter::builtin(config).unwrap();
        let stats = converter.convert("a\nb\n<br>", "react").stats.unwrap();
        assert_eq!(stats.conversion_accuracy, 67.0);
    }

    #[test]
    fn test_convert_default_uses_table_rule_set() {
        let converter = Converter::builtin(Config::default()).unwrap();
        let conversion = converter.convert_default("<p>x</p>");
        assert_eq!(conversion.transform.rule_set_used, "table");
        assert_eq!(conversion.stats.unwrap().rule_set_applied, "Table Transfer");
    }
}
