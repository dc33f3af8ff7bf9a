#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Observation and spatial aggregate types.
//!
//! These types carry the handoff surface between the aggregation core and
//! the map-rendering layer: raw GPS observations in, grid cells and
//! administrative area cells out. They are independent of any particular
//! geocoding provider or boundary data source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single GPS-tagged observation (one uploaded photo).
///
/// Produced by the EXIF extraction step; immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocatedObservation {
    /// Upstream photo identifier.
    pub id: String,
    /// Latitude (WGS84).
    pub latitude: f64,
    /// Longitude (WGS84).
    pub longitude: f64,
    /// Capture time from EXIF metadata.
    pub timestamp: DateTime<Utc>,
}

/// A normalized Japanese administrative address.
///
/// `None` means "unresolved", never an empty string. `town` is never
/// textually equal to `city`; the resolver nulls it when they coincide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAddress {
    /// Prefecture (都道府県), e.g. "東京都".
    pub prefecture: Option<String>,
    /// City or special ward (市区町村), e.g. "中野区".
    pub city: Option<String>,
    /// Town or block (町丁目), e.g. "弥生町3丁目".
    pub town: Option<String>,
}

impl AdminAddress {
    /// Returns `true` when no field resolved at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.prefecture.is_none() && self.city.is_none() && self.town.is_none()
    }
}

/// An observation paired with its resolved address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedObservation {
    /// The underlying GPS observation.
    pub observation: LocatedObservation,
    /// Resolved administrative address (possibly all-`None`).
    pub address: AdminAddress,
}

/// Granularity at which administrative aggregation and boundary matching
/// are requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminLevel {
    /// Prefecture (都道府県).
    Prefecture,
    /// City or special ward (市区町村).
    City,
    /// Town or block (町丁目).
    Town,
}

impl std::fmt::Display for AdminLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prefecture => write!(f, "prefecture"),
            Self::City => write!(f, "city"),
            Self::Town => write!(f, "town"),
        }
    }
}

/// Geographic bounds of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridBounds {
    /// Southern edge.
    pub min_lat: f64,
    /// Northern edge.
    pub max_lat: f64,
    /// Western edge.
    pub min_lng: f64,
    /// Eastern edge.
    pub max_lng: f64,
}

/// One occupied cell of a uniform geodesic grid.
///
/// Row/column indices are relative to the bounding-box origin of a single
/// aggregation run, so `id` is only stable within that run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridCell {
    /// `"row:col"` within this run.
    pub id: String,
    /// Row index from the run origin.
    pub row: i64,
    /// Column index from the run origin.
    pub col: i64,
    /// Cell center latitude.
    pub center_lat: f64,
    /// Cell center longitude.
    pub center_lng: f64,
    /// Cell edges in degrees.
    pub bounds: GridBounds,
    /// IDs of the observations bucketed into this cell.
    pub observations: Vec<String>,
    /// Number of observations in this cell.
    pub count: usize,
    /// Log-scaled display intensity in [0, 1].
    pub intensity: f64,
}

/// Result of one grid aggregation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridStats {
    /// Occupied cells, sorted descending by count.
    pub cells: Vec<GridCell>,
    /// Largest per-cell observation count.
    pub max_count: usize,
    /// Cell edge length used for this run, in meters.
    pub cell_size_meters: f64,
}

/// One administrative area bucket.
///
/// For city and town levels `name` is a composite `"{parent} {child}"` key
/// so that same-named children under different parents stay distinct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAreaCell {
    /// Bucket key (same as `name`).
    pub id: String,
    /// Area display name / composite key.
    pub name: String,
    /// Aggregation level this cell was built at.
    pub level: AdminLevel,
    /// IDs of the observations bucketed into this area.
    pub observations: Vec<String>,
    /// Number of observations in this area.
    pub count: usize,
    /// Log-scaled display intensity in [0, 1].
    pub intensity: f64,
    /// Running-mean centroid latitude of the member observations.
    pub center_lat: f64,
    /// Running-mean centroid longitude of the member observations.
    pub center_lng: f64,
}

/// Result of one administrative aggregation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAreaStats {
    /// Occupied areas, sorted descending by count.
    pub areas: Vec<AdminAreaCell>,
    /// Largest per-area observation count.
    pub max_count: usize,
    /// Level the aggregation was run at.
    pub level: AdminLevel,
}

/// Bucket key used for observations whose address did not resolve at the
/// requested level.
pub const UNRESOLVED_AREA_KEY: &str = "不明";
