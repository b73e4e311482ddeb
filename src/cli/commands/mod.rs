//! CLI commands module

pub mod init;
pub mod interactive;
pub mod rules;
pub mod scan;

use clap::Args;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Config;
use crate::error::BiasLensError;
use crate::rules::constants::filter_valid_categories;
use crate::rules::Classifier;

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Files to scan (reads stdin if none provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output format (terminal, json)
    #[arg(short, long, default_value = "terminal")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Only check specific categories
    #[arg(long, value_delimiter = ',')]
    pub only: Option<Vec<String>>,

    /// Skip specific categories
    #[arg(long, value_delimiter = ',')]
    pub skip: Option<Vec<String>>,

    /// Exit successfully as long as the final score does not exceed this value
    #[arg(long, value_name = "SCORE", value_parser = clap::value_parser!(u32).range(0..=100))]
    pub max_score: Option<u32>,
}

/// Arguments for the interactive command
#[derive(Args, Debug)]
pub struct InteractiveArgs {
    /// Only check specific categories
    #[arg(long, value_delimiter = ',')]
    pub only: Option<Vec<String>>,

    /// Skip specific categories
    #[arg(long, value_delimiter = ',')]
    pub skip: Option<Vec<String>>,
}

/// Arguments for the rules command
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Output format (terminal, json)
    #[arg(short, long, default_value = "terminal")]
    pub format: OutputFormat,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Skip interactive prompts
    #[arg(long)]
    pub non_interactive: bool,
}

/// Output format for scan and rules commands
#[derive(Debug, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

/// Load configuration and build a classifier with the category filters applied.
///
/// Returns `Ok(None)` when `--only` was given but none of its categories are valid.
pub(crate) fn prepare_classifier(
    config_path: Option<&Path>,
    only: Option<Vec<String>>,
    skip: Option<Vec<String>>,
) -> Result<Option<Classifier>, BiasLensError> {
    let config = Config::load(config_path)?;
    let mut classifier = Classifier::from_config(&config)?;
    debug!(rules = classifier.catalog().len(), "Rule catalog loaded");

    if let Some(only) = only {
        let only = filter_valid_categories(only);
        if only.is_empty() {
            return Ok(None);
        }
        classifier.set_only_categories(only);
    }
    if let Some(skip) = skip {
        classifier.set_skip_categories(filter_valid_categories(skip));
    }

    Ok(Some(classifier))
}
