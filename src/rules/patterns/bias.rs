//! Built-in bias detection patterns
//!
//! Every pattern is written against lowercased text and looks for a group
//! term followed, anywhere later on the same line, by a trait or role that
//! is stereotypically attached to it.

use lazy_static::lazy_static;
use regex::Regex;

use crate::rules::category::Category;

/// A pattern for detecting a biased phrasing
pub struct BiasPattern {
    pub id: &'static str,
    pub category: Category,
    pub label: &'static str,
    pub regex: Regex,
}

lazy_static! {
    /// Collection of built-in bias patterns, in evaluation order
    pub static ref BIAS_PATTERNS: Vec<BiasPattern> = vec![
        // Gender
        BiasPattern {
            id: "GEN001",
            category: Category::Gender,
            label: "masculine profession assumption",
            regex: Regex::new(r"\b(he|his|him)\b.*\b(engineer|doctor|leader|manager)\b").unwrap(),
        },
        BiasPattern {
            id: "GEN002",
            category: Category::Gender,
            label: "feminine role stereotype",
            regex: Regex::new(r"\b(she|her)\b.*\b(nurse|assistant|teacher)\b").unwrap(),
        },

        // Race
        BiasPattern {
            id: "RAC001",
            category: Category::Race,
            label: "racial generalization",
            regex: Regex::new(r"\b(asians?)\b.*\b(good at math|smart)\b").unwrap(),
        },
        BiasPattern {
            id: "RAC002",
            category: Category::Race,
            label: "racial stereotype",
            regex: Regex::new(r"\b(blacks?|africans?)\b.*\b(athletic|musical)\b").unwrap(),
        },

        // Age
        BiasPattern {
            id: "AGE001",
            category: Category::Age,
            label: "age-based assumption",
            regex: Regex::new(r"\b(old|elderly)\b.*\b(slow|forgetful)\b").unwrap(),
        },
        BiasPattern {
            id: "AGE002",
            category: Category::Age,
            label: "age stereotype",
            regex: Regex::new(r"\b(young|gen z)\b.*\b(lazy|inexperienced)\b").unwrap(),
        },

        // Socioeconomic
        BiasPattern {
            id: "SOC001",
            category: Category::Socioeconomic,
            label: "economic bias",
            regex: Regex::new(r"\b(poor)\b.*\b(lazy|uneducated)\b").unwrap(),
        },
        BiasPattern {
            id: "SOC002",
            category: Category::Socioeconomic,
            label: "privilege assumption",
            regex: Regex::new(r"\b(rich|wealthy)\b.*\b(successful|deserving)\b").unwrap(),
        },
    ];
}
