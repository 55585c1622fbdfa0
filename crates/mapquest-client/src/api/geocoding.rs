//! Geocoding API endpoints.

use crate::config::configuration;
use crate::MapQuestClient;
use mapquest_core::{GeocodeOptions, GeocodeResult, MapQuestError, Result};
use std::fmt::Display;
use tracing::{debug, warn};

/// Path of the address geocoding endpoint
pub const GEOCODING_PATH: &str = "/geocoding/v1/address";

/// Geocoding API endpoints
pub struct GeocodingApi<'a> {
    client: &'a MapQuestClient,
}

impl<'a> GeocodingApi<'a> {
    pub(crate) const fn new(client: &'a MapQuestClient) -> Self {
        Self { client }
    }

    /// Geocode a single address
    #[must_use]
    pub fn address(&self, address: impl Into<String>) -> GeocodeRequestBuilder<'a> {
        GeocodeRequestBuilder::new(self.client, address.into())
    }
}

/// Builder for address geocoding requests
pub struct GeocodeRequestBuilder<'a> {
    client: &'a MapQuestClient,
    address: String,
    options: GeocodeOptions,
}

impl<'a> GeocodeRequestBuilder<'a> {
    fn new(client: &'a MapQuestClient, address: String) -> Self {
        Self {
            client,
            address,
            options: GeocodeOptions::new(),
        }
    }

    /// Add an API option, e.g. `("max_results", 2)` or `("thumb_maps", false)`
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.options.insert(key, value);
        self
    }

    /// Add every option from an option set
    #[must_use]
    pub fn options(mut self, options: GeocodeOptions) -> Self {
        self.options.extend(options.iter());
        self
    }

    /// Query parameters for this request, excluding the API key
    ///
    /// An option named `location` replaces the escaped address.
    pub(crate) fn query(&self) -> Vec<(String, String)> {
        let mut options = self.options.to_mapquest_notation();
        let location = options
            .remove("location")
            .unwrap_or_else(|| escape_address(&self.address));

        let mut params = Vec::with_capacity(options.len() + 1);
        params.push(("location".to_string(), location));
        params.extend(options);
        params
    }

    /// Execute the request
    pub async fn send(self) -> Result<GeocodeResult> {
        debug!(address = %self.address, options = self.options.len(), "geocoding address");

        let body = self.client.get_raw(GEOCODING_PATH, &self.query()).await?;

        match GeocodeResult::from_json(&body) {
            Ok(result) => {
                debug!(found = result.address_found(), "geocode response parsed");
                Ok(result)
            }
            Err(MapQuestError::Api {
                statuscode,
                messages,
            }) => {
                warn!(statuscode, ?messages, "geocoding request rejected");
                Err(MapQuestError::Api {
                    statuscode,
                    messages,
                })
            }
            Err(e) => Err(e),
        }
    }
}

/// Percent-encode an address for the `location` parameter
///
/// Uses form encoding, so spaces become `+`.
pub fn escape_address(address: &str) -> String {
    url::form_urlencoded::byte_serialize(address.as_bytes()).collect()
}

/// Geocode an address with the shared [`Configuration`](crate::Configuration)
///
/// Fails with [`MapQuestError::MissingApiKey`] until an API key has been set
/// through [`configure`](crate::configure).
pub async fn geocode_address(address: &str, options: &GeocodeOptions) -> Result<GeocodeResult> {
    let client = configuration().client()?;
    client.geocode_address(address, options).await
}
