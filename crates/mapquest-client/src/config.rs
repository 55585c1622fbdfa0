//! Process-wide client configuration.

use crate::MapQuestClient;
use mapquest_core::{MapQuestError, Result};
use std::sync::{OnceLock, PoisonError, RwLock};
use std::time::Duration;

static SHARED: OnceLock<RwLock<Configuration>> = OnceLock::new();

/// Settings used to build clients from the shared configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    /// MapQuest API key, as issued (already URL-encoded)
    pub api_key: Option<String>,

    /// Override for the API base URL
    pub base_url: Option<String>,

    /// Request timeout passed through to the HTTP client
    pub timeout: Option<Duration>,
}

impl Configuration {
    /// Build a client from these settings
    pub fn client(&self) -> Result<MapQuestClient> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(MapQuestError::MissingApiKey)?;

        let mut builder = MapQuestClient::builder(api_key);
        if let Some(url) = &self.base_url {
            builder = builder.base_url(url.as_str());
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}

fn shared() -> &'static RwLock<Configuration> {
    SHARED.get_or_init(|| RwLock::new(Configuration::default()))
}

/// Modify the shared configuration
///
/// ```rust,ignore
/// mapquest_client::configure(|config| {
///     config.api_key = Some("your-api-key".into());
/// });
/// ```
pub fn configure<F>(mutate: F)
where
    F: FnOnce(&mut Configuration),
{
    let mut config = shared().write().unwrap_or_else(PoisonError::into_inner);
    mutate(&mut *config);
}

/// Snapshot of the shared configuration
pub fn configuration() -> Configuration {
    shared()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}
