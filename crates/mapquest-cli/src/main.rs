//! mqgeo - geocode addresses with the MapQuest API.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    mapquest_cli::run().await
}
