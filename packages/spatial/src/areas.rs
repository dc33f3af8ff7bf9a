//! Administrative area aggregation.
//!
//! Buckets resolved observations by administrative name at a requested
//! level. City and town keys are composited with their parent name so that
//! same-named children in different parents stay distinct (every prefecture
//! has a 本町 somewhere). Centroids are folded in as a streaming arithmetic
//! mean rather than averaged post-hoc.

use std::collections::BTreeMap;

use photo_map_spatial_models::{
    AdminAddress, AdminAreaCell, AdminAreaStats, AdminLevel, ResolvedObservation,
    UNRESOLVED_AREA_KEY,
};

use crate::intensity;

/// Derives the bucket key for an address at the given level.
///
/// Composite keys join parent and child with a single space. Observations
/// lacking every relevant field collapse into [`UNRESOLVED_AREA_KEY`].
#[must_use]
pub fn area_key(address: &AdminAddress, level: AdminLevel) -> String {
    let key = match level {
        AdminLevel::Prefecture => address.prefecture.clone(),
        AdminLevel::City => join_parts(address.prefecture.as_deref(), address.city.as_deref()),
        AdminLevel::Town => join_parts(address.city.as_deref(), address.town.as_deref()),
    };
    key.unwrap_or_else(|| UNRESOLVED_AREA_KEY.to_string())
}

fn join_parts(parent: Option<&str>, child: Option<&str>) -> Option<String> {
    match (parent, child) {
        (Some(p), Some(c)) => Some(format!("{p} {c}")),
        (Some(p), None) => Some(p.to_string()),
        (None, Some(c)) => Some(c.to_string()),
        (None, None) => None,
    }
}

struct AreaAccumulator {
    observations: Vec<String>,
    center_lat: f64,
    center_lng: f64,
}

/// Buckets observations by administrative name and computes per-area stats.
///
/// Output is sorted descending by count; re-running on unchanged input
/// yields an identical area set.
#[must_use]
pub fn aggregate(observations: &[ResolvedObservation], level: AdminLevel) -> AdminAreaStats {
    let mut buckets: BTreeMap<String, AreaAccumulator> = BTreeMap::new();

    for resolved in observations {
        let key = area_key(&resolved.address, level);
        let acc = buckets.entry(key).or_insert_with(|| AreaAccumulator {
            observations: Vec::new(),
            center_lat: 0.0,
            center_lng: 0.0,
        });

        acc.observations.push(resolved.observation.id.clone());
        #[allow(clippy::cast_precision_loss)]
        let n = acc.observations.len() as f64;
        acc.center_lat = (acc.center_lat * (n - 1.0) + resolved.observation.latitude) / n;
        acc.center_lng = (acc.center_lng * (n - 1.0) + resolved.observation.longitude) / n;
    }

    let max_count = buckets.values().map(|a| a.observations.len()).max().unwrap_or(0);

    let mut areas: Vec<AdminAreaCell> = buckets
        .into_iter()
        .map(|(name, acc)| AdminAreaCell {
            id: name.clone(),
            count: acc.observations.len(),
            intensity: intensity::scale(acc.observations.len(), max_count),
            name,
            level,
            observations: acc.observations,
            center_lat: acc.center_lat,
            center_lng: acc.center_lng,
        })
        .collect();

    areas.sort_by(|a, b| b.count.cmp(&a.count));

    AdminAreaStats {
        areas,
        max_count,
        level,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use photo_map_spatial_models::LocatedObservation;

    use super::*;

    fn resolved(
        id: &str,
        lat: f64,
        lng: f64,
        prefecture: Option<&str>,
        city: Option<&str>,
        town: Option<&str>,
    ) -> ResolvedObservation {
        ResolvedObservation {
            observation: LocatedObservation {
                id: id.to_string(),
                latitude: lat,
                longitude: lng,
                timestamp: Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap(),
            },
            address: AdminAddress {
                prefecture: prefecture.map(String::from),
                city: city.map(String::from),
                town: town.map(String::from),
            },
        }
    }

    #[test]
    fn city_level_uses_composite_key() {
        let key = area_key(
            &AdminAddress {
                prefecture: Some("東京都".to_string()),
                city: Some("中野区".to_string()),
                town: None,
            },
            AdminLevel::City,
        );
        assert_eq!(key, "東京都 中野区");
    }

    #[test]
    fn missing_fields_fall_back_to_present_part() {
        let key = area_key(
            &AdminAddress {
                prefecture: None,
                city: Some("中野区".to_string()),
                town: None,
            },
            AdminLevel::City,
        );
        assert_eq!(key, "中野区");
    }

    #[test]
    fn fully_unresolved_maps_to_sentinel() {
        let key = area_key(&AdminAddress::default(), AdminLevel::Town);
        assert_eq!(key, UNRESOLVED_AREA_KEY);
    }

    #[test]
    fn identical_city_pair_collapses_with_mean_centroid() {
        let observations = vec![
            resolved("a", 35.70, 139.66, Some("東京都"), Some("中野区"), None),
            resolved("b", 35.72, 139.68, Some("東京都"), Some("中野区"), None),
        ];
        let stats = aggregate(&observations, AdminLevel::City);

        assert_eq!(stats.areas.len(), 1);
        let area = &stats.areas[0];
        assert_eq!(area.count, 2);
        assert_eq!(area.name, "東京都 中野区");
        assert!((area.center_lat - 35.71).abs() < 1e-9);
        assert!((area.center_lng - 139.67).abs() < 1e-9);
    }

    #[test]
    fn same_town_name_in_different_cities_stays_distinct() {
        let observations = vec![
            resolved("a", 35.70, 139.66, Some("東京都"), Some("中野区"), Some("本町")),
            resolved("b", 35.68, 139.70, Some("東京都"), Some("渋谷区"), Some("本町")),
        ];
        let stats = aggregate(&observations, AdminLevel::Town);
        assert_eq!(stats.areas.len(), 2);
    }

    #[test]
    fn output_sorted_descending_by_count() {
        let observations = vec![
            resolved("a", 35.70, 139.66, Some("東京都"), None, None),
            resolved("b", 35.60, 139.50, Some("神奈川県"), None, None),
            resolved("c", 35.61, 139.51, Some("神奈川県"), None, None),
        ];
        let stats = aggregate(&observations, AdminLevel::Prefecture);
        assert_eq!(stats.areas[0].name, "神奈川県");
        assert_eq!(stats.areas[0].count, 2);
        assert_eq!(stats.max_count, 2);
        assert!((stats.areas[0].intensity - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rerun_is_idempotent() {
        let observations = vec![
            resolved("a", 35.70, 139.66, Some("東京都"), Some("中野区"), None),
            resolved("b", 35.60, 139.50, None, None, None),
        ];
        let first = aggregate(&observations, AdminLevel::City);
        let second = aggregate(&observations, AdminLevel::City);
        assert_eq!(first, second);
    }
}
