//! Main MapQuest API client implementation.

use crate::api::GeocodingApi;
use mapquest_core::{GeocodeOptions, GeocodeResult, MapQuestError, Result};
use reqwest::Client as HttpClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// The MapQuest open API base URL
pub const DEFAULT_BASE_URL: &str = "http://open.mapquestapi.com";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Main MapQuest API client
#[derive(Clone)]
pub struct MapQuestClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    api_key: String,
    base_url: String,
}

impl MapQuestClient {
    /// Create a new client with the given API key using default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        MapQuestClientBuilder::new(api_key).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> MapQuestClientBuilder {
        MapQuestClientBuilder::new(api_key)
    }

    /// Access geocoding endpoints
    #[must_use]
    pub fn geocoding(&self) -> GeocodingApi<'_> {
        GeocodingApi::new(self)
    }

    /// Geocode an address
    ///
    /// Shorthand for `client.geocoding().address(address).options(..).send()`.
    pub async fn geocode_address(
        &self,
        address: &str,
        options: &GeocodeOptions,
    ) -> Result<GeocodeResult> {
        self.geocoding()
            .address(address)
            .options(options.clone())
            .send()
            .await
    }

    /// The base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Perform a GET request and return the response body
    ///
    /// Parameter values are sent as given; callers escape them beforehand.
    pub(crate) async fn get_raw(&self, path: &str, params: &[(String, String)]) -> Result<String> {
        let url = self.build_url(path, params);
        debug!(path, params = params.len(), "GET request");

        let response = self
            .inner
            .http
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Build a URL with the API key and query parameters
    ///
    /// The key always comes first; a `key` entry in `params` replaces the
    /// configured one.
    pub(crate) fn build_url(&self, path: &str, params: &[(String, String)]) -> String {
        let key = params
            .iter()
            .rev()
            .find(|(k, _)| k == "key")
            .map_or(self.inner.api_key.as_str(), |(_, v)| v.as_str());

        let mut url = format!("{}{}", self.inner.base_url, path);
        url.push_str("?key=");
        url.push_str(key);

        for (name, value) in params.iter().filter(|(k, _)| k != "key") {
            url.push('&');
            url.push_str(name);
            url.push('=');
            url.push_str(value);
        }

        url
    }

    /// Return the body of a successful response
    async fn handle_response(&self, response: reqwest::Response) -> Result<String> {
        let status = response.status();

        if status.is_success() {
            return response.text().await.map_err(transport_error);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "MapQuest returned an error status");

        let message = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or_default().to_string()
        } else {
            body
        };

        Err(MapQuestError::Status {
            code: status.as_u16(),
            message,
        })
    }
}

/// Classify a reqwest failure
fn transport_error(err: reqwest::Error) -> MapQuestError {
    if err.is_timeout() {
        MapQuestError::Timeout
    } else if err.is_connect() {
        MapQuestError::Connection(err.to_string())
    } else {
        MapQuestError::Http(err.to_string())
    }
}

/// Builder for configuring a [`MapQuestClient`]
#[derive(Debug, Clone)]
pub struct MapQuestClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl MapQuestClientBuilder {
    /// Create a new builder with the given API key
    ///
    /// MapQuest hands out keys already URL-encoded; pass them as issued.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("mapquest-rust/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<MapQuestClient> {
        let base_url = url::Url::parse(&self.base_url)
            .map_err(|e| MapQuestError::Config(format!("invalid base URL {}: {e}", self.base_url)))?;

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| MapQuestError::Config(e.to_string()))?;

        Ok(MapQuestClient {
            inner: Arc::new(ClientInner {
                http,
                api_key: self.api_key,
                base_url: base_url.as_str().trim_end_matches('/').to_string(),
            }),
        })
    }
}
