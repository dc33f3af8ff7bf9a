#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Spatial aggregation core for the photo map.
//!
//! Buckets GPS observations two ways: into a uniform geodesic grid
//! ([`grid`]) and into administrative areas at a requested level
//! ([`areas`]). Both share the log-scaled intensity law ([`intensity`])
//! that drives the color ramp ([`color`]). [`export`] converts aggregates
//! into `GeoJSON` feature collections for the map-rendering layer.
//!
//! Everything here is pure, synchronous, single-pass CPU work over
//! in-memory slices: re-entrant and safe to call from any thread.

pub mod areas;
pub mod color;
pub mod degrees;
pub mod export;
pub mod grid;
pub mod intensity;
