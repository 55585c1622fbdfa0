//! Rust client for the MapQuest geocoding API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mapquest::{GeocodeOptions, MapQuestClient};
//!
//! #[tokio::main]
//! async fn main() -> mapquest::Result<()> {
//!     let client = MapQuestClient::new("your-api-key")?;
//!
//!     let geocode = client
//!         .geocoding()
//!         .address("2710 Avenida 8 de Octubre, Montevideo, Uruguay")
//!         .option("max_results", 2)
//!         .send()
//!         .await?;
//!
//!     if geocode.address_found() {
//!         println!("{:?}, {:?}", geocode.lat(), geocode.lng());
//!         println!("Street: {:?}", geocode.street());
//!         // Fields without a dedicated accessor
//!         println!("Quality code: {}", geocode.get_str("geocode_quality_code")?);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Applications that set the key once can use the shared configuration:
//!
//! ```rust,ignore
//! mapquest::configure(|config| config.api_key = Some("your-api-key".into()));
//! let geocode = mapquest::geocode_address("home", &mapquest::GeocodeOptions::new()).await?;
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/mapquest/0.2.0")]

// Re-export core types
pub use mapquest_core::*;

// Re-export client
pub use mapquest_client::{
    api, configuration, configure, geocode_address, Configuration, MapQuestClient,
    MapQuestClientBuilder, DEFAULT_BASE_URL,
};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
