//! Uniform geodesic grid aggregation.
//!
//! Buckets observations into fixed-size square cells. The cell size in
//! degrees is evaluated once at the bounding-box center latitude and
//! reused for every observation, so cells are only approximately uniform
//! in true ground area away from that latitude. Acceptable at city/metro
//! scale; revisit if runs ever span whole latitudinal bands.

use std::collections::BTreeMap;

use photo_map_spatial_models::{GridBounds, GridCell, GridStats, LocatedObservation};

use crate::{degrees, intensity};

/// Default cell edge length in meters.
pub const DEFAULT_CELL_SIZE_METERS: f64 = 500.0;

/// Buckets observations into a uniform grid and computes per-cell stats.
///
/// Empty input yields an empty result. Cells come back sorted descending
/// by count; re-running on unchanged input yields an identical cell set.
#[must_use]
pub fn aggregate(observations: &[LocatedObservation], cell_size_meters: f64) -> GridStats {
    if observations.is_empty() {
        return GridStats {
            cells: Vec::new(),
            max_count: 0,
            cell_size_meters,
        };
    }

    let mut min_lat = f64::INFINITY;
    let mut max_lat = f64::NEG_INFINITY;
    let mut min_lng = f64::INFINITY;
    let mut max_lng = f64::NEG_INFINITY;

    for obs in observations {
        min_lat = min_lat.min(obs.latitude);
        max_lat = max_lat.max(obs.latitude);
        min_lng = min_lng.min(obs.longitude);
        max_lng = max_lng.max(obs.longitude);
    }

    let center_lat = f64::midpoint(min_lat, max_lat);
    let cell_h = degrees::meters_to_lat_degrees(cell_size_meters);
    let cell_w = degrees::meters_to_lng_degrees(cell_size_meters, center_lat);

    // Pad the bounding box by one cell so edge points never sit exactly on
    // a cell boundary.
    let origin_lat = min_lat - cell_h;
    let origin_lng = min_lng - cell_w;

    let mut buckets: BTreeMap<(i64, i64), Vec<&LocatedObservation>> = BTreeMap::new();

    for obs in observations {
        #[allow(clippy::cast_possible_truncation)]
        let row = ((obs.latitude - origin_lat) / cell_h).floor() as i64;
        #[allow(clippy::cast_possible_truncation)]
        let col = ((obs.longitude - origin_lng) / cell_w).floor() as i64;
        buckets.entry((row, col)).or_default().push(obs);
    }

    let max_count = buckets.values().map(Vec::len).max().unwrap_or(0);

    let mut cells: Vec<GridCell> = buckets
        .into_iter()
        .map(|((row, col), members)| {
            #[allow(clippy::cast_precision_loss)]
            let (row_f, col_f) = (row as f64, col as f64);
            let cell_min_lat = origin_lat + row_f * cell_h;
            let cell_min_lng = origin_lng + col_f * cell_w;
            GridCell {
                id: format!("{row}:{col}"),
                row,
                col,
                center_lat: cell_min_lat + cell_h / 2.0,
                center_lng: cell_min_lng + cell_w / 2.0,
                bounds: GridBounds {
                    min_lat: cell_min_lat,
                    max_lat: cell_min_lat + cell_h,
                    min_lng: cell_min_lng,
                    max_lng: cell_min_lng + cell_w,
                },
                count: members.len(),
                intensity: intensity::scale(members.len(), max_count),
                observations: members.into_iter().map(|o| o.id.clone()).collect(),
            }
        })
        .collect();

    cells.sort_by(|a, b| b.count.cmp(&a.count));

    GridStats {
        cells,
        max_count,
        cell_size_meters,
    }
}
