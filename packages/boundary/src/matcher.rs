//! Name matching between area aggregates and boundary polygons.
//!
//! Aggregated area names and boundary feature names come from different
//! vocabularies (geocoding provider vs. open polygon datasets), so exact
//! equality is too strict: "中野" must find "中野区" and vice versa.
//! Matching normalizes both sides per level, accepts equality or mutual
//! substring containment, and breaks same-name ties by the candidate
//! polygon centroid nearest to the area's observation centroid. No
//! point-in-polygon geometry is involved.

use std::collections::BTreeMap;

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use photo_map_address::normalize::{normalize_chome, normalize_city, normalize_prefecture};
use photo_map_spatial_models::{AdminAreaStats, AdminLevel};

use crate::islands;

/// Count and intensity carried from an area cell onto a matched polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaMetrics {
    /// Observation count for the area.
    pub count: usize,
    /// Log-scaled intensity for the area.
    pub intensity: f64,
}

/// Extracts the name → metrics map the matcher consumes from aggregation
/// output.
#[must_use]
pub fn area_metrics(stats: &AdminAreaStats) -> BTreeMap<String, AreaMetrics> {
    stats
        .areas
        .iter()
        .map(|area| {
            (
                area.name.clone(),
                AreaMetrics {
                    count: area.count,
                    intensity: area.intensity,
                },
            )
        })
        .collect()
}

/// Extracts the name → centroid hint map from aggregation output.
#[must_use]
pub fn area_centroids(stats: &AdminAreaStats) -> BTreeMap<String, (f64, f64)> {
    stats
        .areas
        .iter()
        .map(|area| (area.name.clone(), (area.center_lat, area.center_lng)))
        .collect()
}

/// Matches area names against a borrowed polygon collection.
///
/// Produces a new, smaller collection whose features carry `name`,
/// `matchedKey`, `count` and `intensity` properties. Targets with no
/// matching polygon are silently omitted; the caller falls back to point
/// markers for those. At prefecture level a matched `MultiPolygon`
/// spanning remote islands is split into two features (see
/// [`crate::islands`]).
#[must_use]
pub fn match_areas(
    polygons: &FeatureCollection,
    level: AdminLevel,
    metrics: &BTreeMap<String, AreaMetrics>,
    centroids: Option<&BTreeMap<String, (f64, f64)>>,
    name_keys: &[String],
) -> FeatureCollection {
    let mut features = Vec::new();

    for (target, m) in metrics {
        let norm_target = normalize_for_level(target, level);
        if norm_target.is_empty() {
            continue;
        }

        let candidates: Vec<&Feature> = polygons
            .features
            .iter()
            .filter(|feature| {
                feature_name(feature, name_keys).is_some_and(|name| {
                    let norm_name = normalize_for_level(name, level);
                    !norm_name.is_empty() && names_match(&norm_target, &norm_name)
                })
            })
            .collect();

        let hint = centroids.and_then(|c| c.get(target));
        let Some(chosen) = pick_candidate(&candidates, hint) else {
            continue;
        };

        let display_name = feature_name(chosen, name_keys)
            .unwrap_or(target)
            .to_string();

        match chosen
            .geometry
            .as_ref()
            .filter(|_| level == AdminLevel::Prefecture)
            .and_then(islands::split_remote_islands)
        {
            Some((mainland, remote)) => {
                features.push(build_feature(mainland, &display_name, target, m));
                features.push(build_feature(
                    remote,
                    &format!("{display_name}{}", islands::REMOTE_SUFFIX),
                    target,
                    m,
                ));
            }
            None => {
                if let Some(geometry) = chosen.geometry.clone() {
                    features.push(build_feature(geometry, &display_name, target, m));
                }
            }
        }
    }

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn normalize_for_level(name: &str, level: AdminLevel) -> String {
    match level {
        AdminLevel::Prefecture => normalize_prefecture(name),
        AdminLevel::City => normalize_city(name),
        AdminLevel::Town => normalize_chome(name),
    }
}

/// Equality or mutual substring containment between normalized names.
fn names_match(a: &str, b: &str) -> bool {
    a == b || a.contains(b) || b.contains(a)
}

/// Picks among same-named candidates: nearest centroid when a hint is
/// available, first match otherwise.
fn pick_candidate<'a>(
    candidates: &[&'a Feature],
    hint: Option<&(f64, f64)>,
) -> Option<&'a Feature> {
    match (candidates, hint) {
        ([], _) => None,
        ([single], _) | ([single, ..], None) => Some(*single),
        (many, Some(&(hint_lat, hint_lng))) => many
            .iter()
            .min_by(|a, b| {
                let da = centroid_distance_sq(a, hint_lat, hint_lng);
                let db = centroid_distance_sq(b, hint_lat, hint_lng);
                da.total_cmp(&db)
            })
            .copied(),
    }
}

/// Squared degree-space distance from a feature's coordinate-mean
/// centroid to the hint. Adequate at municipal scale; features without a
/// polygon geometry sort last.
fn centroid_distance_sq(feature: &Feature, hint_lat: f64, hint_lng: f64) -> f64 {
    feature
        .geometry
        .as_ref()
        .and_then(geometry_centroid)
        .map_or(f64::INFINITY, |(lat, lng)| {
            let dlat = lat - hint_lat;
            let dlng = lng - hint_lng;
            dlat * dlat + dlng * dlng
        })
}

/// Coordinate-mean centroid over every ring position of a polygon or
/// multipolygon geometry.
fn geometry_centroid(geometry: &Geometry) -> Option<(f64, f64)> {
    let mut sum_lat = 0.0;
    let mut sum_lng = 0.0;
    let mut n = 0usize;

    let mut fold = |position: &Vec<f64>| {
        if let [lng, lat, ..] = position.as_slice() {
            sum_lng += lng;
            sum_lat += lat;
            n += 1;
        }
    };

    match &geometry.value {
        Value::Polygon(rings) => {
            rings.iter().flatten().for_each(&mut fold);
        }
        Value::MultiPolygon(polygons) => {
            polygons.iter().flatten().flatten().for_each(&mut fold);
        }
        _ => return None,
    }

    if n == 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = n as f64;
    Some((sum_lat / n, sum_lng / n))
}

fn build_feature(geometry: Geometry, name: &str, matched_key: &str, m: &AreaMetrics) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("name".to_string(), name.into());
    properties.insert("matchedKey".to_string(), matched_key.into());
    properties.insert("count".to_string(), m.count.into());
    properties.insert("intensity".to_string(), m.intensity.into());

    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// First present name property in the source's fallback order.
fn feature_name<'a>(feature: &'a Feature, name_keys: &[String]) -> Option<&'a str> {
    let properties = feature.properties.as_ref()?;
    name_keys.iter().find_map(|key| {
        properties
            .get(key)
            .and_then(serde_json::Value::as_str)
            .filter(|name| !name.is_empty())
    })
}
