//! Output formatting module for CLI

pub mod json;
mod terminal;

pub use json::JsonOutput;
pub use terminal::TerminalOutput;

use crate::error::BiasLensError;
use crate::rules::{RuleCatalog, SessionReport};

/// Trait for rendering session reports
pub trait ReportRenderer {
    fn render_report(&self, report: &SessionReport) -> Result<String, BiasLensError>;
}

/// Trait for rendering the rule catalog
pub trait CatalogRenderer {
    fn render_catalog(&self, catalog: &RuleCatalog) -> Result<String, BiasLensError>;
}
