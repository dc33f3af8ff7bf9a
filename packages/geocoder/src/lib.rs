#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Reverse geocoding client for photo observations.
//!
//! Wraps the external reverse-geocoding provider: one HTTP request per
//! observation, issued strictly sequentially with a minimum inter-request
//! delay to respect the provider's rate limit. The provider endpoint and
//! delay are defined in `services/reverse.toml`, embedded at compile time;
//! the access token is supplied by the caller and never embedded.
//!
//! A failed geocode degrades to an unresolved address for that one
//! observation; it never aborts the batch.

pub mod batch;
pub mod reverse;

use serde::Deserialize;
use thiserror::Error;

/// Errors from reverse geocoding operations.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider rate limit exceeded.
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Response parsing failed.
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parsing failure.
        message: String,
    },
}

/// Reverse-geocoding provider configuration loaded from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Unique identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// API base URL, without the trailing coordinate path segment.
    pub base_url: String,
    /// Minimum delay between consecutive requests in milliseconds.
    pub rate_limit_ms: u64,
    /// Response language tag.
    pub language: String,
    /// Comma-separated category filter forwarded to the provider.
    pub types: String,
}

/// Browser-identifiable User-Agent for provider requests.
const PROVIDER_USER_AGENT: &str = "Mozilla/5.0 (compatible; PhotoMap/1.0; +https://github.com)";

/// Embedded provider configuration.
const PROVIDER_TOML: &str = include_str!("../services/reverse.toml");

/// Returns the embedded provider configuration.
///
/// # Panics
///
/// Panics if the embedded TOML is malformed (a compile-time guarantee in
/// practice since the config ships with the crate).
#[must_use]
pub fn provider_config() -> ProviderConfig {
    toml::de::from_str(PROVIDER_TOML)
        .unwrap_or_else(|e| panic!("Failed to parse reverse geocoding config: {e}"))
}

/// Builds a `reqwest::Client` configured for provider requests.
///
/// # Errors
///
/// Returns [`GeocodeError`] if the client cannot be built.
pub fn build_client() -> Result<reqwest::Client, GeocodeError> {
    reqwest::Client::builder()
        .user_agent(PROVIDER_USER_AGENT)
        .build()
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = provider_config();
        assert_eq!(config.id, "reverse");
        assert!(!config.base_url.is_empty());
        assert!(config.rate_limit_ms >= 120);
    }

    #[test]
    fn config_types_cover_all_categories() {
        let config = provider_config();
        for category in ["region", "district", "place", "locality", "neighborhood", "address"] {
            assert!(
                config.types.split(',').any(|t| t == category),
                "missing category {category}"
            );
        }
    }
}
