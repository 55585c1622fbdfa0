//! Configuration management.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// MapQuest API key, as issued.
    pub api_key: Option<String>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// Override for the MapQuest API base URL.
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "mq-reader", "mqgeo")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content)?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Set a single key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api_key" | "key" => self.api_key = Some(value.to_string()),
            "output_format" | "output" => self.output_format = Some(value.parse()?),
            "base_url" => self.base_url = Some(value.to_string()),
            "timeout_secs" | "timeout" => self.timeout_secs = Some(value.parse()?),
            _ => {
                anyhow::bail!(
                    "Unknown config key: {}\n\n\
                     Available keys:\n  \
                     api_key        - Your MapQuest API key\n  \
                     output_format  - Default output format (pretty/json/yaml)\n  \
                     base_url       - MapQuest API base URL\n  \
                     timeout_secs   - Request timeout in seconds",
                    key
                );
            }
        }
        Ok(())
    }
}
