//! Core types for the MapQuest geocoding API client.
//!
//! This crate holds everything that does not touch the network:
//!
//! - **Types**: [`GeocodeResult`], the parsed geocoding response, and
//!   [`GeocodeOptions`], the option mapping sent with a request
//! - **Notation**: [`camelize`], which turns `snake_case` option and field
//!   names into MapQuest's `lowerCamelCase`
//! - **Errors**: [`MapQuestError`] and the [`Result`] alias
//!
//! # Example
//!
//! ```rust,ignore
//! use mapquest_core::{GeocodeResult, Result};
//!
//! fn print_location(body: &str) -> Result<()> {
//!     let geocode = GeocodeResult::from_json(body)?;
//!     if geocode.address_found() {
//!         println!("{:?}, {:?}", geocode.lat(), geocode.lng());
//!         println!("quality code: {}", geocode.get_str("geocode_quality_code")?);
//!     }
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/mapquest-core/0.2.0")]

mod error;
mod notation;
pub mod types;

pub use error::{MapQuestError, Result};
pub use notation::camelize;
pub use types::*;
