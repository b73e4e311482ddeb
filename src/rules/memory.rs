//! Cumulative score memory

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::category::Category;

/// Points added to the aggregate score per recorded match
pub const POINTS_PER_MATCH: u32 = 10;

/// Upper bound of the aggregate score
pub const MAX_SCORE: u32 = 100;

/// Per-session match counters.
///
/// Counters only ever grow until [`ScoreMemory::reset`], so the derived
/// score is monotonically non-decreasing and saturates at [`MAX_SCORE`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreMemory {
    counts: BTreeMap<Category, usize>,
    categories_found: BTreeSet<Category>,
}

impl ScoreMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one match for a category
    pub fn record(&mut self, category: Category) {
        *self.counts.entry(category).or_insert(0) += 1;
        self.categories_found.insert(category);
    }

    /// Match count for a category (0 if it never matched)
    pub fn count(&self, category: Category) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &BTreeMap<Category, usize> {
        &self.counts
    }

    pub fn categories_found(&self) -> &BTreeSet<Category> {
        &self.categories_found
    }

    /// Total matches across all categories
    pub fn total_matches(&self) -> usize {
        self.counts.values().sum()
    }

    /// Aggregate score: `min(100, 10 * total_matches)`
    pub fn score(&self) -> u32 {
        let total = u32::try_from(self.total_matches()).unwrap_or(u32::MAX);
        total.saturating_mul(POINTS_PER_MATCH).min(MAX_SCORE)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Clear all counters
    pub fn reset(&mut self) {
        self.counts.clear();
        self.categories_found.clear();
    }
}
