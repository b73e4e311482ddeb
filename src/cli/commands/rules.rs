//! Rules command - List the effective rule catalog

use std::path::Path;

use super::{OutputFormat, RulesArgs};
use crate::cli::exit_codes;
use crate::cli::output::{CatalogRenderer, JsonOutput, TerminalOutput};
use crate::config::Config;
use crate::error::BiasLensError;
use crate::rules::RuleCatalog;

pub async fn execute(args: RulesArgs, config_path: Option<&Path>) -> Result<i32, BiasLensError> {
    let config = Config::load(config_path)?;
    let catalog = RuleCatalog::from_config(&config)?;

    let renderer: Box<dyn CatalogRenderer> = match args.format {
        OutputFormat::Terminal => Box::new(TerminalOutput::new()),
        OutputFormat::Json => Box::new(JsonOutput::new()),
    };

    println!("{}", renderer.render_catalog(&catalog)?);

    Ok(exit_codes::SUCCESS)
}
