//! Mainland/remote-island splitting for prefecture polygons.
//!
//! A prefecture whose `MultiPolygon` spans both a contiguous mainland and
//! far-flung islands (Tokyo with the Izu and Ogasawara chains) renders
//! badly as one feature: the bounding box stretches hundreds of
//! kilometers of open sea. The heuristic here classifies each member
//! polygon by coordinate thresholds so the two groups can be rendered
//! independently. The thresholds are tuned to Tokyo's geography and are
//! deliberately isolated in this module; swapping or disabling them must
//! not touch the matching algorithm.

use geojson::{Geometry, PolygonType, Value};

/// A member polygon east of this longitude is a remote island
/// (Ogasawara chain, including Minamitorishima).
pub const REMOTE_MIN_LNG: f64 = 141.0;

/// A member polygon south of this latitude is a remote island
/// (Izu chain southward).
pub const REMOTE_MAX_LAT: f64 = 34.6;

/// Name suffix appended to the remote-islands feature.
pub const REMOTE_SUFFIX: &str = "（離島）";

/// Splits a `MultiPolygon` into mainland and remote-island geometries.
///
/// Returns `None` when the geometry is not a `MultiPolygon` or when every
/// member polygon falls on one side of the heuristic, in which case the
/// feature should be emitted unchanged.
#[must_use]
pub fn split_remote_islands(geometry: &Geometry) -> Option<(Geometry, Geometry)> {
    let Value::MultiPolygon(polygons) = &geometry.value else {
        return None;
    };

    let mut mainland: Vec<PolygonType> = Vec::new();
    let mut remote: Vec<PolygonType> = Vec::new();

    for polygon in polygons {
        if is_remote(polygon) {
            remote.push(polygon.clone());
        } else {
            mainland.push(polygon.clone());
        }
    }

    if mainland.is_empty() || remote.is_empty() {
        return None;
    }

    Some((
        Geometry::new(Value::MultiPolygon(mainland)),
        Geometry::new(Value::MultiPolygon(remote)),
    ))
}

/// A polygon is remote when any of its ring positions crosses a
/// threshold.
fn is_remote(polygon: &PolygonType) -> bool {
    polygon.iter().flatten().any(|position| {
        matches!(position.as_slice(), [lng, lat, ..]
            if *lng > REMOTE_MIN_LNG || *lat < REMOTE_MAX_LAT)
    })
}
