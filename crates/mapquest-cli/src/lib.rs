//! # mapquest-cli
//!
//! Command-line interface for the MapQuest geocoding API.
//!
//! ## Features
//!
//! - **Geocoding**: look up an address and print its coordinates and locality fields
//! - **Any response field**: `--field` reads fields this tool has no column for
//! - **Multiple output formats**: pretty, JSON, YAML
//! - **Persistent configuration**: API key and defaults in a TOML file

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
