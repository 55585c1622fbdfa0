//! API endpoint modules.

mod geocoding;

pub use geocoding::{
    escape_address, geocode_address, GeocodeRequestBuilder, GeocodingApi, GEOCODING_PATH,
};
