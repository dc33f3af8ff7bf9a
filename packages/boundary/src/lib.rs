#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Boundary polygon loading and name matching.
//!
//! Administrative area aggregates become map overlays by matching their
//! names against externally hosted polygon datasets, one per
//! administrative level ([`sources`]). Matching is by normalized name
//! equality or containment plus nearest-centroid tie-breaking
//! ([`matcher`]); this core deliberately does no point-in-polygon
//! geometry. Downloaded collections are cached process-wide with a
//! single-flight guard ([`cache`]) and fetched with bounded retries
//! ([`fetch`]).

pub mod cache;
pub mod fetch;
pub mod islands;
pub mod matcher;
pub mod prefcode;
pub mod sources;

use thiserror::Error;

/// Errors from boundary data operations.
#[derive(Debug, Error)]
pub enum BoundaryError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `GeoJSON` structure was not a feature collection.
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// Fetch gave up after exhausting retries.
    #[error("Fetch error: {message}")]
    Fetch {
        /// Description of the final failed attempt.
        message: String,
    },
}
