//! kvdata CLI
//!
//! Drives the key/value data provider from the command line.

mod cli;
mod commands;
mod error;
mod terminal;

use clap::Parser;
use colored::Colorize;
use kv_provider::{ProviderConfig, ProviderRegistry, logging};
use std::sync::Arc;

use cli::{Cli, Commands};
use error::{CliError, Result};
use terminal::TerminalNotifier;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run(Cli::parse()).await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ProviderConfig::load(path)?,
        None => ProviderConfig::default(),
    };

    let filter = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    logging::init(filter)
        .map_err(|e| CliError::user(format!("Failed to initialize logging: {e}")))?;
    tracing::debug!(?config, "configuration loaded");

    let registry = ProviderRegistry::with_defaults(Arc::new(TerminalNotifier), config);
    execute_command(&registry, cli.command).await
}

async fn execute_command(registry: &ProviderRegistry, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Load { path, pretty } => commands::run_load(registry, &path, pretty).await,
        Commands::Save { path, input } => {
            commands::run_save(registry, &path, input.as_deref()).await
        }
        Commands::Resolve { path } => commands::run_resolve(&path),
        Commands::Formats => commands::run_formats(registry),
    }
}
