//! Engine Configuration

/// Engine configuration options
#[derive(Debug, Clone)]
pub struct Config {
    /// Rule set used when the caller names none
    pub default_rule_set: String,

    /// Decimal places kept in the conversion accuracy figure
    pub accuracy_precision: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_rule_set: "table".to_string(),
            accuracy_precision: 2,
        }
    }
}
