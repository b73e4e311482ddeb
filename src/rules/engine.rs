//! Rule-based classification engine

use tracing::{debug, span, trace, Level};

use super::catalog::RuleCatalog;
use super::category::Category;
use super::memory::ScoreMemory;
use super::results::{Finding, SessionReport};
use super::suggestions::SuggestionTable;
use crate::config::Config;
use crate::error::BiasLensError;

/// Classifier holding a rule catalog and the score memory it feeds.
///
/// Each instance owns its memory, so two classifiers never share counters.
pub struct Classifier {
    catalog: RuleCatalog,
    memory: ScoreMemory,
    suggestions: SuggestionTable,
    only_categories: Option<Vec<Category>>,
    skip_categories: Option<Vec<Category>>,
}

impl Classifier {
    /// Create a new classifier over the given catalog
    pub fn new(catalog: RuleCatalog) -> Self {
        Self {
            catalog,
            memory: ScoreMemory::new(),
            suggestions: SuggestionTable::default(),
            only_categories: None,
            skip_categories: None,
        }
    }

    /// Create a classifier from configuration (rule overrides, custom rules
    /// and suggestion overrides)
    pub fn from_config(config: &Config) -> Result<Self, BiasLensError> {
        let catalog = RuleCatalog::from_config(config)?;
        Ok(Self::new(catalog).with_suggestions(SuggestionTable::new(config.suggestions.clone())))
    }

    /// Replace the suggestion table
    pub fn with_suggestions(mut self, suggestions: SuggestionTable) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// Set categories to exclusively run. Unknown names are ignored.
    pub fn set_only_categories(&mut self, categories: Vec<String>) {
        self.only_categories = Some(parse_categories(&categories));
    }

    /// Set categories to skip. Unknown names are ignored.
    pub fn set_skip_categories(&mut self, categories: Vec<String>) {
        self.skip_categories = Some(parse_categories(&categories));
    }

    /// Check if a category should be run
    fn should_run_category(&self, category: Category) -> bool {
        if let Some(only) = &self.only_categories {
            return only.contains(&category);
        }

        if let Some(skip) = &self.skip_categories {
            return !skip.contains(&category);
        }

        true
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    pub fn memory(&self) -> &ScoreMemory {
        &self.memory
    }

    /// Test every enabled rule against `text` without recording anything.
    ///
    /// Findings come back in catalog order.
    pub fn evaluate(&self, text: &str) -> Vec<Finding> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let normalized = text.to_lowercase();
        let mut findings = Vec::new();

        for rule in self.catalog.rules() {
            if !self.should_run_category(rule.category) {
                trace!(rule_id = %rule.id, category = %rule.category, "Skipping rule");
                continue;
            }

            if rule.is_match(&normalized) {
                debug!(rule_id = %rule.id, category = %rule.category, "Rule matched");
                let mut finding = Finding::new(&rule.id, rule.category, &rule.label)
                    .with_suggestion(self.suggestions.get(rule.category.as_str()));
                finding.severity = rule.severity;
                findings.push(finding);
            }
        }

        findings
    }

    /// Classify `text` and record every finding in the score memory
    pub fn classify(&mut self, text: &str) -> Vec<Finding> {
        let span = span!(Level::DEBUG, "classify", chars = text.len());
        let _guard = span.enter();

        let findings = self.evaluate(text);
        for finding in &findings {
            self.memory.record(finding.category);
        }

        debug!(
            findings_count = findings.len(),
            score = self.memory.score(),
            "Classification complete"
        );

        findings
    }

    /// Current aggregate score in `[0, 100]`
    pub fn score(&self) -> u32 {
        self.memory.score()
    }

    /// Advice for a category name, with a neutral fallback for unknown names
    pub fn suggestion(&self, category: &str) -> &str {
        self.suggestions.get(category)
    }

    /// Clear the score memory
    pub fn reset(&mut self) {
        debug!("Resetting score memory");
        self.memory.reset();
    }

    /// Snapshot the current score memory
    pub fn report(&self) -> SessionReport {
        SessionReport::from_memory(&self.memory)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(RuleCatalog::builtin())
    }
}

fn parse_categories(names: &[String]) -> Vec<Category> {
    names
        .iter()
        .filter_map(|name| Category::from_name(name))
        .collect()
}
