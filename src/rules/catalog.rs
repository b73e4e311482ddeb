//! Rule catalog
//!
//! A catalog is an ordered, immutable list of [`Rule`] records. Matching code
//! only ever iterates it, so rules can be listed, filtered or extended from
//! configuration without touching the classifier.

use regex::{Regex, RegexBuilder};
use tracing::debug;

use super::category::Category;
use super::patterns::bias::BIAS_PATTERNS;
use super::results::Severity;
use crate::config::Config;
use crate::error::{BiasLensError, ConfigError};

/// A single classification rule
#[derive(Debug, Clone)]
pub struct Rule {
    /// Unique rule identifier (e.g., "GEN001", "custom/chairman")
    pub id: String,
    pub category: Category,
    pub label: String,
    pub severity: Severity,
    matcher: Regex,
}

impl Rule {
    pub fn new(
        id: impl Into<String>,
        category: Category,
        label: impl Into<String>,
        matcher: Regex,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            label: label.into(),
            severity: Severity::default(),
            matcher,
        }
    }

    /// Source text of the pattern
    pub fn pattern(&self) -> &str {
        self.matcher.as_str()
    }

    /// Whether the pattern matches anywhere in `text`
    pub fn is_match(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }
}

/// Ordered collection of rules
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
}

impl RuleCatalog {
    /// Create a catalog from explicit rules, keeping their order
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The built-in bias patterns
    pub fn builtin() -> Self {
        let rules = BIAS_PATTERNS
            .iter()
            .map(|p| Rule::new(p.id, p.category, p.label, p.regex.clone()))
            .collect();
        Self { rules }
    }

    /// Built-in rules minus those disabled in config, followed by the
    /// custom rules in id order
    pub fn from_config(config: &Config) -> Result<Self, BiasLensError> {
        let mut catalog = Self::builtin();
        catalog.rules.retain(|rule| {
            let enabled = config.is_rule_enabled(&rule.id);
            if !enabled {
                debug!(rule_id = %rule.id, "Rule disabled by configuration");
            }
            enabled
        });

        for (rule_id, custom) in &config.custom.rules {
            debug!(rule_id = %rule_id, pattern = %custom.pattern, "Loading custom rule");

            let category = Category::from_name(&custom.category).ok_or_else(|| {
                ConfigError::UnknownCategory {
                    rule_id: rule_id.clone(),
                    category: custom.category.clone(),
                }
            })?;

            let matcher = RegexBuilder::new(&custom.pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| ConfigError::InvalidPattern {
                    rule_id: rule_id.clone(),
                    source: e,
                })?;

            let label = custom
                .label
                .clone()
                .unwrap_or_else(|| format!("Pattern '{}' matched", custom.pattern));

            catalog.rules.push(Rule::new(
                format!("custom/{}", rule_id),
                category,
                label,
                matcher,
            ));
        }

        Ok(catalog)
    }

    /// Get all rules in evaluation order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Find a rule by id
    pub fn get(&self, rule_id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == rule_id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
