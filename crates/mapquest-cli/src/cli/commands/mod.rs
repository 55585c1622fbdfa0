//! Command implementations.

pub mod config;
pub mod geocode;

use std::time::Duration;

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// MapQuest API key
    pub api_key: Option<String>,

    /// API base URL override
    pub base_url: Option<String>,

    /// Request timeout
    pub timeout: Option<Duration>,

    /// Output format
    pub output_format: OutputFormat,

    /// Disable colors
    pub no_color: bool,
}

impl Context {
    /// Get the API key, returning an error if not set.
    pub fn require_api_key(&self) -> anyhow::Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "API key required.\n\n\
                     Set it with one of:\n  \
                     1. --api-key <KEY>\n  \
                     2. MAPQUEST_API_KEY environment variable\n  \
                     3. mqgeo config set api_key <KEY>\n\n\
                     Get your key at: https://developer.mapquest.com"
                )
            })
    }

    /// Install these settings as the shared MapQuest configuration.
    pub fn configure(&self) -> anyhow::Result<()> {
        let api_key = self.require_api_key()?.to_string();
        mapquest::configure(|config| {
            config.api_key = Some(api_key);
            config.base_url.clone_from(&self.base_url);
            config.timeout = self.timeout;
        });
        Ok(())
    }
}
