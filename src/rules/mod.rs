//! Rules module - Bias rules and classification engine

pub mod catalog;
pub mod category;
pub mod constants;
pub mod engine;
pub mod memory;
pub mod patterns;
pub mod results;
pub mod suggestions;

pub use catalog::{Rule, RuleCatalog};
pub use category::Category;
pub use engine::Classifier;
pub use memory::ScoreMemory;
pub use results::{Finding, SessionReport, Severity};
pub use suggestions::suggestion;
