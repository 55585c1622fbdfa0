//! Geocoding through the process-wide configuration.
//!
//! Kept in its own test binary with a single test so nothing else touches
//! the shared instance concurrently.

use mapquest_client::api::GEOCODING_PATH;
use mapquest_client::{configuration, configure, geocode_address, GeocodeOptions, MapQuestError};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn test_geocode_address_with_shared_configuration() {
    let options = GeocodeOptions::new().with("max_results", 2);

    let result = geocode_address("home", &options).await;
    assert!(
        matches!(result, Err(MapQuestError::MissingApiKey)),
        "Expected MissingApiKey, got: {result:?}"
    );

    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(GEOCODING_PATH))
        .and(query_param("key", "1234567"))
        .and(query_param("location", "home"))
        .and(query_param("maxResults", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{ "locations": [{ "street": "Main St", "geocodeQualityCode": "L1AAA" }] }],
            "info": { "statuscode": 0, "messages": [] }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    configure(|config| {
        config.api_key = Some("1234567".into());
        config.base_url = Some(mock_server.uri());
    });
    assert_eq!(configuration().api_key.as_deref(), Some("1234567"));

    let geocode = geocode_address("home", &options).await.unwrap();
    assert!(geocode.address_found());
    assert_eq!(geocode.street(), Some("Main St"));
    assert_eq!(geocode.get_str("geocode_quality_code").unwrap(), "L1AAA");
    assert!(geocode.lat_lng().is_none());
}
