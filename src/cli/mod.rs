//! # CLI Module
//!
//! This module defines the command-line interface for BiasLens using `clap`.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `scan` | Classify files (or stdin) line by line and print a report |
//! | `interactive` | Read sentences from the console and keep a running score |
//! | `rules` | List the effective rule catalog |
//! | `init` | Write a default configuration file |
//!
//! ## Global Options
//!
//! - `-v, --verbose` - Increase verbosity level (use multiple times: -v, -vv, -vvv)
//! - `-c, --config <FILE>` - Path to configuration file
//! - `--no-color` - Disable colored output
//!
//! ## Examples
//!
//! ```bash
//! # Scan a document
//! biaslens scan notes.md
//!
//! # Only gender and age rules, JSON output
//! biaslens scan --only gender,age --format json notes.md
//!
//! # Interactive session
//! biaslens interactive
//! ```

pub mod commands;
pub mod exit_codes;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{InitArgs, InteractiveArgs, RulesArgs, ScanArgs};

/// BiasLens - Scan text for stereotyped and biased phrasing
#[derive(Parser, Debug)]
#[command(name = "biaslens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify files or stdin line by line and print a report
    Scan(ScanArgs),

    /// Classify sentences typed on the console with a running score
    Interactive(InteractiveArgs),

    /// List the rules that would be evaluated
    Rules(RulesArgs),

    /// Initialize a new configuration file
    Init(InitArgs),
}
