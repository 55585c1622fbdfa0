//! HTTP client for the MapQuest geocoding API.
//!
//! The main entry point is [`MapQuestClient`]. For applications that set
//! their API key once at startup, [`configure`] stores it in a shared
//! [`Configuration`] and the free function [`geocode_address`] uses it.

#![doc(html_root_url = "https://docs.rs/mapquest-client/0.2.0")]

mod client;
mod config;
pub mod api;

pub use api::geocode_address;
pub use client::{MapQuestClient, MapQuestClientBuilder, DEFAULT_BASE_URL};
pub use config::*;
pub use mapquest_core::{GeocodeOptions, GeocodeResult, MapQuestError, Result};
