//! BiasLens - A CLI tool to scan text for stereotyped and biased phrasing
//!
//! This is the main entry point for the CLI application.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use biaslens::cli::{commands, exit_codes, Cli, Commands};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = cli.config.as_deref();

    // Execute the appropriate command
    let result: anyhow::Result<i32> = match cli.command {
        Commands::Scan(args) => commands::scan::execute(args, config_path)
            .await
            .map_err(Into::into),
        Commands::Interactive(args) => commands::interactive::execute(args, config_path)
            .await
            .map_err(Into::into),
        Commands::Rules(args) => commands::rules::execute(args, config_path)
            .await
            .map_err(Into::into),
        Commands::Init(args) => commands::init::execute(args, config_path).await,
    };

    // Handle exit codes for CI integration
    match result {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
