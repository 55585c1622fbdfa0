use crate::error::{MapQuestError, Result};
use crate::notation::camelize;
use crate::types::ResponseInfo;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::str::FromStr;

const FIRST_LOCATIONS: &str = "/results/0/locations";
const FIRST_LOCATION: &str = "/results/0/locations/0";

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
}

/// Parsed response of the geocoding endpoint
///
/// The raw JSON document is kept as the source of truth. The commonly used
/// fields of the first location are extracted up front; anything else the
/// API returns can be read with [`get`](Self::get).
#[derive(Debug, Clone)]
pub struct GeocodeResult {
    raw: Value,
    info: ResponseInfo,
    street: Option<String>,
    city: Option<String>,
    county: Option<String>,
    state: Option<String>,
    country: Option<String>,
    postal_code: Option<String>,
    location_type: Option<String>,
    geocode_quality: Option<String>,
    geocode_quality_code: Option<String>,
    side_of_street: Option<String>,
    lat_lng: Option<LatLng>,
}

impl GeocodeResult {
    /// Parse a response body
    ///
    /// Fails with [`MapQuestError::Api`] when `info.statuscode` is not `0`.
    /// A successful response without locations still parses; check
    /// [`address_found`](Self::address_found) before reading fields.
    pub fn from_json(body: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(body)?;
        Self::from_value(raw)
    }

    /// Build from an already parsed document
    pub fn from_value(raw: Value) -> Result<Self> {
        let info = match raw.get("info") {
            Some(info) => parse_info(info)?,
            None => {
                return Err(MapQuestError::MalformedResponse(
                    "missing `info` block".into(),
                ))
            }
        };

        if !info.is_success() {
            return Err(MapQuestError::Api {
                statuscode: info.status_code,
                messages: info.messages,
            });
        }

        let location = raw.pointer(FIRST_LOCATION);
        let text = |field: &str| {
            location
                .and_then(|loc| loc.get(field))
                .and_then(Value::as_str)
                .map(str::to_owned)
        };
        let lat_lng = location
            .and_then(|loc| loc.get("latLng"))
            .and_then(|ll| {
                Some(LatLng {
                    lat: ll.get("lat")?.as_f64()?,
                    lng: ll.get("lng")?.as_f64()?,
                })
            });

        Ok(Self {
            street: text("street"),
            city: text("adminArea5"),
            county: text("adminArea4"),
            state: text("adminArea3"),
            country: text("adminArea1"),
            postal_code: text("postalCode"),
            location_type: text("type"),
            geocode_quality: text("geocodeQuality"),
            geocode_quality_code: text("geocodeQualityCode"),
            side_of_street: text("sideOfStreet"),
            lat_lng,
            info,
            raw,
        })
    }

    /// Whether the API matched the address to at least one location
    #[must_use]
    pub fn address_found(&self) -> bool {
        self.raw
            .pointer(FIRST_LOCATIONS)
            .and_then(Value::as_array)
            .is_some_and(|locations| !locations.is_empty())
    }

    /// Look up any field of the first location
    ///
    /// `field` may be written in `snake_case`; it is camelized before the
    /// lookup, so `geocode_quality_code` reads `geocodeQualityCode`. A field
    /// that is missing, `null` or empty is reported as
    /// [`MapQuestError::UnknownField`].
    pub fn get(&self, field: &str) -> Result<&Value> {
        self.location()
            .and_then(|loc| loc.get(camelize(field)))
            .filter(|value| !is_blank(value))
            .ok_or_else(|| MapQuestError::UnknownField(field.to_string()))
    }

    /// Like [`get`](Self::get), for fields holding a string
    pub fn get_str(&self, field: &str) -> Result<&str> {
        self.get(field)?
            .as_str()
            .ok_or_else(|| MapQuestError::UnknownField(field.to_string()))
    }

    /// The raw first location object, if any
    #[must_use]
    pub fn location(&self) -> Option<&Value> {
        self.raw.pointer(FIRST_LOCATION)
    }

    /// The location string MapQuest echoes back for the request
    #[must_use]
    pub fn provided_location(&self) -> Option<&str> {
        self.raw
            .pointer("/results/0/providedLocation/location")
            .and_then(Value::as_str)
    }

    /// The response `info` block
    #[must_use]
    pub const fn info(&self) -> &ResponseInfo {
        &self.info
    }

    /// The full response document
    #[must_use]
    pub const fn raw(&self) -> &Value {
        &self.raw
    }

    /// Consume the result, returning the full response document
    #[must_use]
    pub fn into_raw(self) -> Value {
        self.raw
    }

    /// Street line (`street`)
    #[must_use]
    pub fn street(&self) -> Option<&str> {
        self.street.as_deref()
    }

    /// City (`adminArea5`)
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// County (`adminArea4`)
    #[must_use]
    pub fn county(&self) -> Option<&str> {
        self.county.as_deref()
    }

    /// State (`adminArea3`)
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// Country code (`adminArea1`)
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Postal code (`postalCode`)
    #[must_use]
    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }

    /// Alias for [`postal_code`](Self::postal_code)
    #[must_use]
    pub fn zip(&self) -> Option<&str> {
        self.postal_code()
    }

    /// Location type (`type`), `s` for stop or `v` for via
    #[must_use]
    pub fn location_type(&self) -> Option<&str> {
        self.location_type.as_deref()
    }

    /// Match granularity (`geocodeQuality`), e.g. `POINT` or `CITY`
    #[must_use]
    pub fn geocode_quality(&self) -> Option<&str> {
        self.geocode_quality.as_deref()
    }

    /// Five character quality code (`geocodeQualityCode`), e.g. `P1XXX`
    #[must_use]
    pub fn geocode_quality_code(&self) -> Option<&str> {
        self.geocode_quality_code.as_deref()
    }

    /// Side of street (`sideOfStreet`): `L`, `R`, `M` or `N`
    #[must_use]
    pub fn side_of_street(&self) -> Option<&str> {
        self.side_of_street.as_deref()
    }

    /// Latitude of the first location
    #[must_use]
    pub fn lat(&self) -> Option<f64> {
        self.lat_lng.map(|ll| ll.lat)
    }

    /// Longitude of the first location
    #[must_use]
    pub fn lng(&self) -> Option<f64> {
        self.lat_lng.map(|ll| ll.lng)
    }

    /// Coordinates of the first location
    #[must_use]
    pub const fn lat_lng(&self) -> Option<LatLng> {
        self.lat_lng
    }
}

fn parse_info(value: &Value) -> Result<ResponseInfo> {
    ResponseInfo::deserialize(value).map_err(|e| MapQuestError::MalformedResponse(e.to_string()))
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

impl FromStr for GeocodeResult {
    type Err = MapQuestError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json(s)
    }
}

impl TryFrom<Value> for GeocodeResult {
    type Error = MapQuestError;

    fn try_from(raw: Value) -> Result<Self> {
        Self::from_value(raw)
    }
}

impl Serialize for GeocodeResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn found() -> Value {
        json!({
            "results": [{
                "locations": [{
                    "latLng": { "lng": -56.15989, "lat": -34.889265 },
                    "adminArea4": "",
                    "adminArea5Type": "City",
                    "adminArea4Type": "County",
                    "adminArea5": "Montevideo",
                    "street": "Avenida 8 de Octubre 2710",
                    "adminArea1": "UY",
                    "adminArea3": "Montevideo",
                    "type": "s",
                    "displayLatLng": { "lng": -56.15989, "lat": -34.889265 },
                    "linkId": 0,
                    "postalCode": "11600",
                    "sideOfStreet": "N",
                    "dragPoint": false,
                    "adminArea1Type": "Country",
                    "geocodeQuality": "POINT",
                    "geocodeQualityCode": "P1XXX",
                    "adminArea3Type": "State"
                }],
                "providedLocation": {
                    "location": "2710 Avenida 8 de Octubre, Montevideo, Uruguay"
                }
            }],
            "options": { "ignoreLatLngInput": false, "maxResults": 2, "thumbMaps": true },
            "info": {
                "copyright": {
                    "text": "© 2014 MapQuest, Inc.",
                    "imageUrl": "http://api.mqcdn.com/res/mqlogo.gif",
                    "imageAltText": "© 2014 MapQuest, Inc."
                },
                "statuscode": 0,
                "messages": []
            }
        })
    }

    #[test]
    fn test_convenience_fields() {
        let geocode = GeocodeResult::from_value(found()).unwrap();

        assert!(geocode.address_found());
        assert_eq!(geocode.lat(), Some(-34.889_265));
        assert_eq!(geocode.lng(), Some(-56.159_89));
        assert_eq!(geocode.street(), Some("Avenida 8 de Octubre 2710"));
        assert_eq!(geocode.city(), Some("Montevideo"));
        assert_eq!(geocode.county(), Some(""));
        assert_eq!(geocode.state(), Some("Montevideo"));
        assert_eq!(geocode.country(), Some("UY"));
        assert_eq!(geocode.zip(), Some("11600"));
        assert_eq!(geocode.location_type(), Some("s"));
        assert_eq!(geocode.geocode_quality(), Some("POINT"));
        assert_eq!(geocode.geocode_quality_code(), Some("P1XXX"));
        assert_eq!(geocode.side_of_street(), Some("N"));
    }

    #[test]
    fn test_open_accessor() {
        let geocode = GeocodeResult::from_value(found()).unwrap();

        assert_eq!(geocode.get_str("geocode_quality_code").unwrap(), "P1XXX");
        assert_eq!(geocode.get_str("side_of_street").unwrap(), "N");
        assert_eq!(geocode.get_str("admin_area5_type").unwrap(), "City");
        assert_eq!(geocode.get("drag_point").unwrap(), &json!(false));
        assert_eq!(geocode.get("link_id").unwrap(), &json!(0));
        assert_eq!(geocode.get("display_lat_lng").unwrap()["lat"], json!(-34.889_265));
    }

    #[test]
    fn test_open_accessor_unknown_field() {
        let geocode = GeocodeResult::from_value(found()).unwrap();

        let err = geocode.get("no_such_field").unwrap_err();
        assert!(matches!(err, MapQuestError::UnknownField(ref f) if f == "no_such_field"));

        // Present but empty counts as unknown
        assert!(matches!(
            geocode.get("admin_area4"),
            Err(MapQuestError::UnknownField(_))
        ));

        // Not a string
        assert!(matches!(
            geocode.get_str("lat_lng"),
            Err(MapQuestError::UnknownField(_))
        ));
    }

    #[test]
    fn test_info_and_provided_location() {
        let geocode: GeocodeResult = found().try_into().unwrap();

        assert!(geocode.info().is_success());
        assert!(geocode.info().messages.is_empty());
        let copyright = geocode.info().copyright.as_ref().unwrap();
        assert_eq!(
            copyright.image_url.as_deref(),
            Some("http://api.mqcdn.com/res/mqlogo.gif")
        );
        assert_eq!(
            geocode.provided_location(),
            Some("2710 Avenida 8 de Octubre, Montevideo, Uruguay")
        );
    }

    #[test]
    fn test_address_not_found() {
        let body = r#"{"results":[{"locations":[]}], "info":{"statuscode":0}}"#;
        let geocode: GeocodeResult = body.parse().unwrap();

        assert!(!geocode.address_found());
        assert!(geocode.street().is_none());
        assert!(geocode.lat_lng().is_none());
        assert!(geocode.location().is_none());
        assert!(matches!(
            geocode.get("street"),
            Err(MapQuestError::UnknownField(_))
        ));
    }

    #[test]
    fn test_missing_results_is_not_found() {
        let geocode = GeocodeResult::from_json(r#"{"info":{"statuscode":0}}"#).unwrap();
        assert!(!geocode.address_found());
    }

    #[test]
    fn test_api_error_status() {
        let body = r#"{"info":{"statuscode":1,"messages":["The request failed."]}}"#;
        let err = GeocodeResult::from_json(body).unwrap_err();

        match err {
            MapQuestError::Api { statuscode, messages } => {
                assert_eq!(statuscode, 1);
                assert_eq!(messages, vec!["The request failed.".to_string()]);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_bodies() {
        assert!(matches!(
            GeocodeResult::from_json("not json"),
            Err(MapQuestError::Json(_))
        ));
        assert!(matches!(
            GeocodeResult::from_json(r#"{"results":[]}"#),
            Err(MapQuestError::MalformedResponse(_))
        ));
        assert!(matches!(
            GeocodeResult::from_json(r#"{"info":{"statuscode":"zero"}}"#),
            Err(MapQuestError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_serializes_as_raw_document() {
        let geocode = GeocodeResult::from_value(found()).unwrap();
        let round = serde_json::to_value(&geocode).unwrap();
        assert_eq!(round, found());
    }
}
