//! Configuration module

pub mod loader;

pub use loader::Config;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Built-in rule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether the rule is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_true() -> bool {
    true
}

/// Custom rule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomRule {
    /// Regex pattern to match, case-insensitively
    pub pattern: String,

    /// Category name (gender, race, age, socioeconomic, custom)
    #[serde(default = "default_custom_category")]
    pub category: String,

    /// Description shown for each match
    pub label: Option<String>,
}

fn default_custom_category() -> String {
    "custom".to_string()
}

/// Custom rules configuration container
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomRulesConfig {
    /// Map of rule ID to rule configuration, kept sorted so catalog order is stable
    #[serde(flatten)]
    pub rules: BTreeMap<String, CustomRule>,
}
