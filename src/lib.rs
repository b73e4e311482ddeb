//! BiasLens Library
//!
//! This crate provides a rule-based classifier that scans text for
//! stereotyped phrasing, keeps per-category match counters, and derives a
//! bounded bias score from them.
//!
//! ```rust
//! use biaslens::rules::{Category, Classifier};
//!
//! let mut classifier = Classifier::default();
//! let findings = classifier.classify("he is a great engineer");
//!
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].category, Category::Gender);
//! assert_eq!(classifier.score(), 10);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod rules;

pub use error::BiasLensError;
