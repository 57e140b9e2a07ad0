//! Spherical and planar geometry helpers shared by the extraction
//! and scoring stages.

use geo::Point;
use hashbrown::HashMap;

use crate::model::BoundingBox;

/// Earth radius used by the haversine formula, kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Equirectangular degrees-to-kilometers scale used by the polygon
/// estimator. Uncalibrated legacy constant, kept for output stability.
const DEG_TO_KM: f64 = 111.32;

/// Great-circle distance between two points in kilometers.
///
/// Points are `(lon, lat)` in degrees, per the `geo` x/y convention.
pub fn haversine_km(a: Point<f64>, b: Point<f64>) -> f64 {
    let (lon1, lat1) = (a.x().to_radians(), a.y().to_radians());
    let (lon2, lat2) = (b.x().to_radians(), b.y().to_radians());

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    2.0 * h.sqrt().asin() * EARTH_RADIUS_KM
}

/// Approximate area of a bounding box in square kilometers.
///
/// Width is measured along the box's mean latitude, height along its
/// west edge. Degenerate input (non-finite coordinates) yields 1.0
/// rather than an error.
pub fn bounding_box_area_km2(bounds: &BoundingBox) -> f64 {
    let mean_lat = (bounds.north + bounds.south) / 2.0;
    let width_km = haversine_km(
        Point::new(bounds.west, mean_lat),
        Point::new(bounds.east, mean_lat),
    );
    let height_km = haversine_km(
        Point::new(bounds.west, bounds.north),
        Point::new(bounds.west, bounds.south),
    );

    let area = width_km * height_km;
    if area.is_finite() {
        round2(area)
    } else {
        1.0
    }
}

/// Planar polygon area in square kilometers via the shoelace formula.
///
/// Vertices are resolved through `coords` in ring order; node ids
/// without coordinates are skipped. Returns `None` when fewer than
/// three vertices resolve.
pub fn polygon_area_km2(node_ids: &[i64], coords: &HashMap<i64, Point<f64>>) -> Option<f64> {
    if node_ids.len() < 3 {
        return None;
    }

    let ring: Vec<Point<f64>> = node_ids
        .iter()
        .filter_map(|id| coords.get(id).copied())
        .collect();
    if ring.len() < 3 {
        return None;
    }

    let mut doubled = 0.0;
    for i in 0..ring.len() {
        let j = (i + 1) % ring.len();
        doubled += ring[i].y() * ring[j].x();
        doubled -= ring[j].y() * ring[i].x();
    }

    let area_deg2 = doubled.abs() / 2.0;
    Some(area_deg2 * DEG_TO_KM * DEG_TO_KM * 0.001)
}

/// Round to two decimal places (report-facing lengths and areas).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to one decimal place (congestion breakdown values).
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
