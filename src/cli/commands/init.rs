//! Init command - Initialize a new configuration file

use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::Confirm;
use std::fs;
use std::path::Path;

use super::InitArgs;
use crate::cli::exit_codes;
use crate::config::loader::CONFIG_FILENAME;
use crate::config::{Config, RuleConfig};
use crate::rules::RuleCatalog;

const CONFIG_EXAMPLES: &str = r#"
# Add a custom rule (matched case-insensitively, category defaults to "custom"):
#
# [custom.chairman]
# pattern = '\bchairman\b'
# category = "gender"
# label = "gendered job title"
#
# Override the advice for a category by adding entries to [suggestions]:
#
# custom = "Follow the house style guide."
"#;

pub async fn execute(args: InitArgs, config_path: Option<&Path>) -> Result<i32> {
    let config_path = config_path.unwrap_or_else(|| Path::new(CONFIG_FILENAME));

    // Check if config already exists
    if config_path.exists() && !args.force {
        if args.non_interactive {
            eprintln!(
                "{} Configuration file already exists. Use --force to overwrite.",
                "Error:".red().bold()
            );
            return Ok(exit_codes::ERROR);
        }

        let overwrite = Confirm::new()
            .with_prompt("Configuration file already exists. Overwrite?")
            .default(false)
            .interact()?;

        if !overwrite {
            println!("{}", "Aborted.".yellow());
            return Ok(exit_codes::SUCCESS);
        }
    }

    let content = render_default_config()?;
    fs::write(config_path, &content).context("Failed to write configuration file")?;

    println!(
        "{} Created {}",
        "Success:".green().bold(),
        config_path.display().to_string().cyan()
    );

    println!("\nNext steps:");
    println!("  1. Review and customize {}", config_path.display().to_string().cyan());
    println!("  2. Run {} to list active rules", "biaslens rules".cyan());
    println!("  3. Run {} to check a document", "biaslens scan <FILE>".cyan());

    Ok(exit_codes::SUCCESS)
}

/// Default configuration listing every built-in rule as enabled, followed
/// by commented examples
fn render_default_config() -> Result<String> {
    let mut config = Config::default();
    for rule in RuleCatalog::builtin().rules() {
        config.rules.insert(rule.id.clone(), RuleConfig::default());
    }

    let body = config
        .to_toml()
        .context("Failed to serialize default configuration")?;

    Ok(format!(
        "# BiasLens configuration\n# Set `enabled = false` to turn a built-in rule off.\n\n{}{}",
        body, CONFIG_EXAMPLES
    ))
}
