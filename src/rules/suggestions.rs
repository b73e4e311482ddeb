//! Rephrasing advice per category

use std::collections::HashMap;

/// Advice given for any category without a dedicated entry
pub const DEFAULT_SUGGESTION: &str = "Use neutral, inclusive language.";

/// Look up the built-in advice for a category name.
///
/// Unknown names get [`DEFAULT_SUGGESTION`] rather than an error.
pub fn suggestion(category: &str) -> &'static str {
    match category {
        "gender" => "Use gender-neutral language and avoid role assumptions.",
        "race" => "Avoid linking abilities to race.",
        "age" => "Describe individuals without age assumptions.",
        "socioeconomic" => "Avoid judging character by economic status.",
        _ => DEFAULT_SUGGESTION,
    }
}

/// Built-in advice with per-category overrides from configuration
#[derive(Debug, Clone, Default)]
pub struct SuggestionTable {
    overrides: HashMap<String, String>,
}

impl SuggestionTable {
    pub fn new(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    /// Advice for a category name, preferring a configured override
    pub fn get(&self, category: &str) -> &str {
        self.overrides
            .get(category)
            .map(String::as_str)
            .unwrap_or_else(|| suggestion(category))
    }
}
