//! Yandex geocoding client.
//!
//! Issues a GET to the geocoder with the address, API key, and
//! `format=json`, then takes the first (most relevant) found place. The
//! place's position comes as a `"lon lat"` space-delimited string -
//! longitude first.

use rust_decimal::Decimal;
use secrecy::ExposeSecret;
use serde::Deserialize;
use tracing::{debug, instrument};

use foodcart_core::Coordinates;

use super::{GeoError, Geocoder};
use crate::config::GeocoderConfig;

/// Client for the Yandex geocoding HTTP API.
#[derive(Debug, Clone)]
pub struct YandexGeocoder {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl YandexGeocoder {
    /// Create a new geocoder client.
    #[must_use]
    pub fn new(config: &GeocoderConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.expose_secret().to_string(),
        }
    }
}

impl Geocoder for YandexGeocoder {
    #[instrument(skip(self))]
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, GeoError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("geocode", address),
                ("apikey", self.api_key.as_str()),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: GeocoderResponse = response.json().await?;
        let coordinates = parse_first_position(&body)?;
        debug!(found = coordinates.is_some(), "geocoded address");
        Ok(coordinates)
    }
}

// =============================================================================
// Response shape
// =============================================================================

#[derive(Debug, Deserialize)]
struct GeocoderResponse {
    response: ResponseBody,
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    #[serde(rename = "GeoObjectCollection")]
    geo_object_collection: GeoObjectCollection,
}

#[derive(Debug, Deserialize)]
struct GeoObjectCollection {
    #[serde(rename = "featureMember", default)]
    feature_member: Vec<FeatureMember>,
}

#[derive(Debug, Deserialize)]
struct FeatureMember {
    #[serde(rename = "GeoObject")]
    geo_object: GeoObject,
}

#[derive(Debug, Deserialize)]
struct GeoObject {
    #[serde(rename = "Point")]
    point: Point,
}

#[derive(Debug, Deserialize)]
struct Point {
    pos: String,
}

/// Extract coordinates from the first found place, or `None` when the
/// service matched nothing.
fn parse_first_position(body: &GeocoderResponse) -> Result<Option<Coordinates>, GeoError> {
    let Some(most_relevant) = body.response.geo_object_collection.feature_member.first() else {
        return Ok(None);
    };

    let pos = &most_relevant.geo_object.point.pos;
    let Some((lon, lat)) = pos.split_once(' ') else {
        return Err(GeoError::MalformedResponse(format!(
            "position is not space-delimited: {pos:?}"
        )));
    };

    let lon = lon.parse::<Decimal>().map_err(|e| {
        GeoError::MalformedResponse(format!("bad longitude {lon:?}: {e}"))
    })?;
    let lat = lat.parse::<Decimal>().map_err(|e| {
        GeoError::MalformedResponse(format!("bad latitude {lat:?}: {e}"))
    })?;

    Ok(Some(Coordinates::new(lon, lat)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn response_with_pos(pos: &str) -> GeocoderResponse {
        serde_json::from_value(serde_json::json!({
            "response": {
                "GeoObjectCollection": {
                    "featureMember": [
                        {"GeoObject": {"Point": {"pos": pos}}},
                        {"GeoObject": {"Point": {"pos": "0 0"}}}
                    ]
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_takes_first_place_lon_first() {
        let body = response_with_pos("37.617700 55.755800");
        let coordinates = parse_first_position(&body).unwrap().unwrap();
        // lon then lat, in the order the position string lists them
        assert_eq!(coordinates.lon, "37.617700".parse::<Decimal>().unwrap());
        assert_eq!(coordinates.lat, "55.755800".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_no_places_is_absence() {
        let body: GeocoderResponse = serde_json::from_value(serde_json::json!({
            "response": {"GeoObjectCollection": {"featureMember": []}}
        }))
        .unwrap();
        assert!(parse_first_position(&body).unwrap().is_none());
    }

    #[test]
    fn test_missing_feature_member_defaults_to_empty() {
        let body: GeocoderResponse = serde_json::from_value(serde_json::json!({
            "response": {"GeoObjectCollection": {}}
        }))
        .unwrap();
        assert!(parse_first_position(&body).unwrap().is_none());
    }

    #[test]
    fn test_malformed_position_is_error_not_panic() {
        let body = response_with_pos("37.617700,55.755800");
        assert!(matches!(
            parse_first_position(&body),
            Err(GeoError::MalformedResponse(_))
        ));

        let body = response_with_pos("not numbers");
        assert!(matches!(
            parse_first_position(&body),
            Err(GeoError::MalformedResponse(_))
        ));
    }
}
