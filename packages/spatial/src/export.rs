//! `GeoJSON` export of aggregation results.
//!
//! The map-rendering layer consumes feature collections, not the stats
//! structs themselves. Grid cells export as their bounding rectangles;
//! admin areas export as centroid points (the polygon rendition comes from
//! boundary matching, which lives in its own package).

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use photo_map_spatial_models::{AdminAreaStats, GridStats};

/// Converts grid cells into a feature collection of cell rectangles.
///
/// Each feature carries `id`, `count` and `intensity` properties.
#[must_use]
pub fn grid_to_features(stats: &GridStats) -> FeatureCollection {
    let features = stats
        .cells
        .iter()
        .map(|cell| {
            let b = &cell.bounds;
            let ring = vec![
                vec![b.min_lng, b.min_lat],
                vec![b.max_lng, b.min_lat],
                vec![b.max_lng, b.max_lat],
                vec![b.min_lng, b.max_lat],
                vec![b.min_lng, b.min_lat],
            ];

            let mut properties = JsonObject::new();
            properties.insert("id".to_string(), cell.id.clone().into());
            properties.insert("count".to_string(), cell.count.into());
            properties.insert("intensity".to_string(), cell.intensity.into());

            Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Polygon(vec![ring]))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// Converts admin area cells into a feature collection of centroid points.
///
/// Each feature carries `name`, `count` and `intensity` properties.
#[must_use]
pub fn areas_to_features(stats: &AdminAreaStats) -> FeatureCollection {
    let features = stats
        .areas
        .iter()
        .map(|area| {
            let mut properties = JsonObject::new();
            properties.insert("name".to_string(), area.name.clone().into());
            properties.insert("count".to_string(), area.count.into());
            properties.insert("intensity".to_string(), area.intensity.into());

            Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Point(vec![
                    area.center_lng,
                    area.center_lat,
                ]))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
