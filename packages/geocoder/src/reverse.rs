//! Single reverse-geocode request against the provider.
//!
//! The provider resolves `(longitude, latitude)` to a ranked feature list;
//! parsing goes through the typed adapter in `photo_map_address::provider`
//! so malformed payloads surface as a [`GeocodeError::Parse`] instead of
//! leaking loose JSON into the resolver.

use photo_map_address::provider::{PlaceFeature, ReverseGeocodeResponse};

use crate::{GeocodeError, ProviderConfig};

/// Reverse-geocodes one coordinate pair into a ranked feature list.
///
/// The caller is responsible for rate limiting between consecutive calls
/// (see `rate_limit_ms` in the provider TOML and [`crate::batch`]).
///
/// # Errors
///
/// Returns [`GeocodeError`] if the HTTP request fails, the provider
/// answers 429, or the response body is not a feature collection.
pub async fn reverse_geocode(
    client: &reqwest::Client,
    config: &ProviderConfig,
    access_token: &str,
    latitude: f64,
    longitude: f64,
) -> Result<Vec<PlaceFeature>, GeocodeError> {
    let url = format!("{}/{longitude},{latitude}.json", config.base_url);

    let resp = client
        .get(&url)
        .query(&[
            ("access_token", access_token),
            ("language", &config.language),
            ("types", &config.types),
        ])
        .send()
        .await?;

    if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(GeocodeError::RateLimited);
    }

    let body: serde_json::Value = resp.error_for_status()?.json().await?;
    parse_response(body)
}

/// Parses the provider response body into ranked features.
fn parse_response(body: serde_json::Value) -> Result<Vec<PlaceFeature>, GeocodeError> {
    let response: ReverseGeocodeResponse =
        serde_json::from_value(body).map_err(|e| GeocodeError::Parse {
            message: format!("Unexpected reverse geocoding response shape: {e}"),
        })?;
    Ok(response.features)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ranked_features() {
        let body = serde_json::json!({
            "features": [
                {
                    "place_type": ["address"],
                    "text": "弥生町３丁目",
                    "place_name": "東京都中野区弥生町３丁目１３番",
                    "context": [
                        { "id": "locality.1", "text": "中野区" },
                        { "id": "region.2", "text": "東京都" }
                    ]
                },
                { "place_type": ["region"], "text": "東京都" }
            ]
        });
        let features = parse_response(body).unwrap();
        assert_eq!(features.len(), 2);
        assert!(features[0].has_category("address"));
    }

    #[test]
    fn empty_feature_list_is_valid() {
        let features = parse_response(serde_json::json!({ "features": [] })).unwrap();
        assert!(features.is_empty());
    }

    #[test]
    fn non_object_body_is_a_parse_error() {
        let result = parse_response(serde_json::json!([1, 2, 3]));
        assert!(matches!(result, Err(GeocodeError::Parse { .. })));
    }
}
