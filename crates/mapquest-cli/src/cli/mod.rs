//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = Config::load()?;
    debug!(api_key_set = config.api_key.is_some(), "configuration loaded");

    // Flag/env first, then the config file
    let ctx = commands::Context {
        api_key: cli.api_key.or_else(|| config.api_key.clone()),
        base_url: cli.base_url.or_else(|| config.base_url.clone()),
        timeout: cli.timeout.or(config.timeout_secs).map(Duration::from_secs),
        output_format: cli.output.or(config.output_format).unwrap_or_default(),
        no_color: cli.no_color,
    };

    if ctx.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Geocode(args) => commands::geocode::execute(ctx, args).await,
        Commands::Config(args) => commands::config::execute(ctx, args),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("mapquest_client=debug,mapquest_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
