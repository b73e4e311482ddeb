//! # Classification Results Structures
//!
//! This module defines the data structures for representing bias findings
//! and session reports.
//!
//! ## Overview
//!
//! - [`Severity`] - Finding severity levels (Low, Medium, High)
//! - [`Finding`] - One rule matching one input, with its suggestion
//! - [`SessionReport`] - Snapshot of a classifier's score memory plus findings
//!
//! ## Examples
//!
//! ### Creating Findings
//!
//! ```rust
//! use biaslens::rules::{Category, Finding, Severity};
//!
//! let finding = Finding::new("GEN001", Category::Gender, "masculine profession assumption")
//!     .with_location("notes.txt:3")
//!     .with_suggestion("Use gender-neutral language and avoid role assumptions.");
//!
//! assert_eq!(finding.severity, Severity::Medium);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::Category;
use super::memory::ScoreMemory;

/// Severity levels for bias findings.
///
/// Every rule currently reports [`Severity::Medium`]; the other levels exist
/// so that reports keep a stable shape if rules ever get real tiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// A single finding: one rule matched one input.
///
/// Findings are produced by the classifier and are not retained by it; the
/// only lasting effect of a match is the counter it bumps in
/// [`ScoreMemory`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Identifier of the rule that matched (e.g., "GEN001", "custom/chairman").
    pub rule_id: String,

    /// Bias dimension of the rule.
    pub category: Category,

    /// Human-readable description of the pattern.
    pub label: String,

    /// Severity of the finding.
    pub severity: Severity,

    /// Advice for rephrasing, looked up from the category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Where the text came from, as "source:line".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Finding {
    /// Create a new finding with the default severity
    pub fn new(rule_id: impl Into<String>, category: Category, label: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            category,
            label: label.into(),
            severity: Severity::default(),
            suggestion: None,
            location: None,
        }
    }

    /// Set the suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Set the location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// A point-in-time view of a classification session.
///
/// The score and counters are copied out of a [`ScoreMemory`]; findings are
/// whatever the caller chose to keep (the interactive console keeps none,
/// a batch scan keeps all of them).
///
/// # Examples
///
/// ```rust
/// use biaslens::rules::{Category, Finding, ScoreMemory, SessionReport};
///
/// let mut memory = ScoreMemory::new();
/// memory.record(Category::Age);
///
/// let report = SessionReport::from_memory(&memory)
///     .with_findings(vec![Finding::new("AGE001", Category::Age, "age-based assumption")]);
///
/// assert_eq!(report.score, 10);
/// assert_eq!(report.findings_by_category(Category::Age).count(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Version of the tool that produced the report.
    pub version: String,

    /// When the report was generated.
    pub generated_at: DateTime<Utc>,

    /// Aggregate score in `[0, 100]`.
    pub score: u32,

    /// Total number of matches recorded.
    pub total_matches: usize,

    /// Match count per category, only for categories that matched.
    pub counts: BTreeMap<Category, usize>,

    /// Distinct categories that matched at least once.
    pub categories_found: Vec<Category>,

    /// Findings collected by the caller.
    findings: Vec<Finding>,
}

impl SessionReport {
    /// Snapshot a score memory
    pub fn from_memory(memory: &ScoreMemory) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            score: memory.score(),
            total_matches: memory.total_matches(),
            counts: memory.counts().clone(),
            categories_found: memory.categories_found().iter().copied().collect(),
            findings: Vec::new(),
        }
    }

    /// Attach findings
    pub fn with_findings(mut self, findings: Vec<Finding>) -> Self {
        self.findings = findings;
        self
    }

    /// Get all findings
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Get findings by category
    pub fn findings_by_category(&self, category: Category) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.category == category)
    }

    /// Check if nothing was detected
    pub fn is_clean(&self) -> bool {
        self.total_matches == 0
    }
}
