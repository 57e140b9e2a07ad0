//! Congestion impact calculators and the headline congestion value.

use geo::Point;
use hashbrown::HashMap;

use super::factors::{self, MAX_CONGESTION_FACTOR};
use crate::extract::RoadInventory;
use crate::geometry::haversine_km;
use crate::model::{Building, Intersections, ParkingStats, Road, TrafficControls, TransitStops};

/// Base congestion from the road mix, scaled to a 0-60 band and topped
/// up by intersection and signal density terms. Capped at 85; an area
/// without categorized roads defaults to 20.
pub fn base_road_congestion(
    inventory: &RoadInventory,
    intersections: &Intersections,
    controls: &TrafficControls,
) -> f64 {
    let total_roads = f64::from(inventory.categorized_total());
    if total_roads == 0.0 {
        return 20.0;
    }

    let weighted: f64 = inventory
        .by_category
        .iter()
        .map(|(category, &count)| f64::from(count) * category.congestion_factor())
        .sum();
    let base_level = weighted / (total_roads * MAX_CONGESTION_FACTOR) * 60.0;

    let intersection_impact = f64::from(intersections.simple) * 0.5
        + f64::from(intersections.complex) * 1.2
        + f64::from(intersections.major) * 2.5;
    let intersection_factor = (intersection_impact / total_roads * 100.0).min(15.0);

    let signal_factor = (f64::from(controls.traffic_lights) / total_roads * 50.0).min(10.0);

    (base_level + intersection_factor + signal_factor).min(85.0)
}

/// Mean traffic pressure of buildings on the surrounding road network.
///
/// Only buildings with a resolvable center and a finite nearest-road
/// distance participate; the pressure of each scales inversely with
/// that distance, clamped to the 0.05-1.0 km band.
pub fn building_impact(
    buildings: &[Building],
    roads: &[Road],
    coords: &HashMap<i64, Point<f64>>,
) -> f64 {
    if buildings.is_empty() || roads.is_empty() {
        return 0.0;
    }

    let mut total_impact = 0.0;
    let mut included = 0u32;

    for building in buildings {
        let Some(center) = building_center(building, coords) else {
            continue;
        };
        let Some(distance) = nearest_road_distance(center, roads, coords) else {
            continue;
        };

        let category = building.category();
        let pressure =
            category.base_factor() + building.capacity_estimate * category.capacity_multiplier();
        let distance_factor = 1.0 / distance.clamp(0.05, 1.0);

        total_impact += pressure * distance_factor;
        included += 1;
    }

    total_impact / f64::from(included.max(1))
}

fn building_center(building: &Building, coords: &HashMap<i64, Point<f64>>) -> Option<Point<f64>> {
    let resolved: Vec<Point<f64>> = building
        .nodes
        .iter()
        .filter_map(|id| coords.get(id).copied())
        .collect();
    if resolved.is_empty() {
        return None;
    }

    let n = resolved.len() as f64;
    let lon = resolved.iter().map(|p| p.x()).sum::<f64>() / n;
    let lat = resolved.iter().map(|p| p.y()).sum::<f64>() / n;
    Some(Point::new(lon, lat))
}

fn nearest_road_distance(
    center: Point<f64>,
    roads: &[Road],
    coords: &HashMap<i64, Point<f64>>,
) -> Option<f64> {
    roads
        .iter()
        .flat_map(|road| road.nodes.iter())
        .filter_map(|id| coords.get(id))
        .map(|point| haversine_km(center, *point))
        .min_by(f64::total_cmp)
}

/// Deficit of parking spots against the 50-per-road-km expectation,
/// plus pressure from street parking. Capped at 20.
pub fn parking_impact(parking: &ParkingStats, roads: &[Road]) -> f64 {
    if roads.is_empty() {
        return 0.0;
    }
    let total_length: f64 = roads.iter().map(|road| road.length_km).sum();
    if total_length == 0.0 {
        return 0.0;
    }

    let expected_spots = total_length * 50.0;
    let deficit = (expected_spots - f64::from(parking.total_spots)).max(0.0);

    let deficit_impact = deficit / expected_spots * 15.0;
    let street_impact = f64::from(parking.street_segments) * 0.3;

    (deficit_impact + street_impact).min(20.0)
}

/// Congestion relief from the transit network, capped at 25.
pub fn transit_relief(stops: &TransitStops) -> f64 {
    factors::weighted_stop_count(stops).min(25.0)
}

/// Headline congestion: impacts minus relief, truncated and clamped to
/// `[5, 95]`.
pub fn final_congestion(
    base_congestion: f64,
    building_impact: f64,
    parking_impact: f64,
    transport_relief: f64,
) -> i32 {
    let total = base_congestion + building_impact + parking_impact - transport_relief;
    (total as i32).clamp(5, 95)
}
