//! Command-line argument definitions using clap.

use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};

/// Geocode addresses with the MapQuest API
///
/// Get your API key at: https://developer.mapquest.com
#[derive(Parser, Debug)]
#[command(name = "mqgeo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// MapQuest API key (or set MAPQUEST_API_KEY env var)
    #[arg(short = 'k', long, env = "MAPQUEST_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// MapQuest API base URL
    #[arg(long, env = "MAPQUEST_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Log requests to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Geocode an address
    Geocode(GeocodeArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Geocode command
// ============================================================================

#[derive(Args, Debug)]
pub struct GeocodeArgs {
    /// Address to geocode, e.g. "2710 Avenida 8 de Octubre, Montevideo, Uruguay"
    pub address: String,

    /// Extra API option as key=value; snake_case keys are camelized
    #[arg(short = 'O', long = "option", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub options: Vec<(String, String)>,

    /// Maximum number of results
    #[arg(short = 'n', long)]
    pub max_results: Option<u32>,

    /// Print only these response fields (e.g. geocode_quality_code)
    #[arg(short, long = "field", value_name = "NAME")]
    pub fields: Vec<String>,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key (api_key, output_format, base_url, timeout_secs)
        key: String,

        /// Value
        value: String,
    },

    /// Print the configuration file path
    Path,
}
