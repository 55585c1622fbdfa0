//! Geocode an address and print what MapQuest knows about it.
//!
//! Run with: cargo run --example geocode -- "2710 Avenida 8 de Octubre, Montevideo, Uruguay"
//!
//! Set the MAPQUEST_API_KEY environment variable before running.

use mapquest::{GeocodeOptions, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let api_key = std::env::var("MAPQUEST_API_KEY")
        .expect("MAPQUEST_API_KEY environment variable is required");
    let address = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "2710 Avenida 8 de Octubre, Montevideo, Uruguay".to_string());

    mapquest::configure(|config| config.api_key = Some(api_key));

    let options = GeocodeOptions::new().with("max_results", 1);
    let geocode = mapquest::geocode_address(&address, &options).await?;

    if !geocode.address_found() {
        println!("No location found for {address}");
        return Ok(());
    }

    println!("=== {address} ===");
    println!("Lat/Lng: {:?}, {:?}", geocode.lat(), geocode.lng());
    println!("Street: {:?}", geocode.street());
    println!("City: {:?}", geocode.city());
    println!("Country: {:?}", geocode.country());
    println!("Quality: {:?}", geocode.geocode_quality());

    // Fields without a dedicated accessor
    match geocode.get_str("map_url") {
        Ok(url) => println!("Map: {url}"),
        Err(e) => println!("Map: {e}"),
    }

    Ok(())
}
