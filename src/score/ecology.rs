//! Ecology scoring: green coverage, transport environmental impact,
//! air quality and noise, blended into one clamped value.

use super::factors;
use crate::extract::RoadInventory;
use crate::model::{
    GreenSpace, ParkingStats, RoadCategory, TrafficControls, WaterFeature,
};

/// Nominal area credited to a green space whose polygon never
/// resolved, km².
const FALLBACK_GREEN_AREA: f64 = 0.01;
const FALLBACK_WATER_AREA: f64 = 0.005;

/// Blend of the four environmental sub-scores, truncated and clamped
/// to `[5, 95]`. A non-positive box area is coerced to 1.0 km².
pub fn ecology_score(
    green_spaces: &[GreenSpace],
    water_features: &[WaterFeature],
    area_km2: f64,
    inventory: &RoadInventory,
    controls: &TrafficControls,
    parking: &ParkingStats,
    hourly_congestion: &[i32],
) -> i32 {
    let area = if area_km2 <= 0.0 { 1.0 } else { area_km2 };

    let green = green_coverage_score(green_spaces, water_features, area);
    let transport =
        transport_environmental_impact(inventory, controls, parking, hourly_congestion, area);
    let air = air_quality_score(inventory, hourly_congestion, green_spaces, area);
    let noise = noise_score(inventory, controls, area);

    let total = green * 0.40 + (100.0 - transport) * 0.35 + air * 0.15 + noise * 0.10;
    (total as i32).clamp(5, 95)
}

/// Piecewise-linear coverage score with a diversity bonus, in
/// `[10, 95]`. Thresholds at 5/15/30/50% coverage.
fn green_coverage_score(
    green_spaces: &[GreenSpace],
    water_features: &[WaterFeature],
    area: f64,
) -> f64 {
    let green_area = summed_area(green_spaces.iter().map(|s| s.area), green_spaces.len(), FALLBACK_GREEN_AREA);
    let water_area = summed_area(
        water_features.iter().map(|w| w.area),
        water_features.len(),
        FALLBACK_WATER_AREA,
    );

    let coverage_percent = (green_area + water_area * 1.2) / area * 100.0;

    let base_score = if coverage_percent >= 50.0 {
        90.0
    } else if coverage_percent >= 30.0 {
        70.0 + (coverage_percent - 30.0) * 1.0
    } else if coverage_percent >= 15.0 {
        50.0 + (coverage_percent - 15.0) * 1.33
    } else if coverage_percent >= 5.0 {
        30.0 + (coverage_percent - 5.0) * 2.0
    } else {
        coverage_percent * 6.0
    };

    (base_score + diversity_bonus(green_spaces)).clamp(10.0, 95.0)
}

/// Sum of known areas; a collection with features but zero known area
/// is credited a nominal area per feature.
fn summed_area(
    areas: impl Iterator<Item = Option<f64>>,
    feature_count: usize,
    fallback_each: f64,
) -> f64 {
    let known: f64 = areas.flatten().sum();
    if known == 0.0 && feature_count > 0 {
        feature_count as f64 * fallback_each
    } else {
        known
    }
}

/// Up to 10 bonus points for variety among park/forest/garden/other.
fn diversity_bonus(green_spaces: &[GreenSpace]) -> f64 {
    let mut park = false;
    let mut forest = false;
    let mut garden = false;
    let mut other = false;

    for space in green_spaces {
        let kind = space.kind.to_lowercase();
        if kind.contains("park") {
            park = true;
        } else if kind.contains("forest") || kind.contains("wood") {
            forest = true;
        } else if kind.contains("garden") {
            garden = true;
        } else {
            other = true;
        }
    }

    let variety = [park, forest, garden, other].iter().filter(|&&v| v).count();
    (variety as f64 * 3.0).min(10.0)
}

/// Environmental pressure of the transport system, in `[5, 95]`.
/// Higher is worse; the ecology blend folds in its inverse.
fn transport_environmental_impact(
    inventory: &RoadInventory,
    controls: &TrafficControls,
    parking: &ParkingStats,
    hourly_congestion: &[i32],
    area: f64,
) -> f64 {
    let avg_congestion = average_congestion(hourly_congestion);
    let congestion_impact = avg_congestion * 0.8;

    let mut road_impact = 0.0;
    let total_length = inventory.total_length_km();
    if total_length > 0.0 {
        for (&category, _) in &inventory.by_category {
            let category_length: f64 = inventory
                .roads
                .iter()
                .filter(|road| road.category == Some(category))
                .map(|road| road.length_km)
                .sum();
            if category_length > 0.0 {
                road_impact += category_length / total_length * category.pollution_factor() * 20.0;
            }
        }
    }

    let parking_impact = if parking.total_spots > 0 {
        (f64::from(parking.total_spots) / area * 0.01).min(20.0)
    } else {
        0.0
    };

    let signal_impact = (f64::from(controls.traffic_lights) / area * 5.0).min(10.0);

    let vehicle_density = estimated_daily_vehicles(inventory, avg_congestion) / area;
    let vehicle_impact = (vehicle_density * 0.001).min(25.0);

    (congestion_impact + road_impact + parking_impact + signal_impact + vehicle_impact)
        .clamp(5.0, 95.0)
}

/// Daily vehicle estimate from road length, lanes and per-subtype
/// intensity, scaled by the average congestion into a 0.3-1.7 band.
fn estimated_daily_vehicles(inventory: &RoadInventory, avg_congestion: f64) -> f64 {
    if inventory.roads.is_empty() {
        return 0.0;
    }

    let capacity: f64 = inventory
        .roads
        .iter()
        .map(|road| road.length_km * f64::from(road.lanes) * factors::traffic_intensity(&road.highway))
        .sum();

    let congestion_multiplier = 0.3 + avg_congestion / 100.0 * 1.4;
    ((capacity * congestion_multiplier) as i64).max(0) as f64
}

/// Air quality in `[10, 95]`: congestion-driven baseline, green bonus,
/// arterial-share penalty.
fn air_quality_score(
    inventory: &RoadInventory,
    hourly_congestion: &[i32],
    green_spaces: &[GreenSpace],
    area: f64,
) -> f64 {
    let avg_congestion = average_congestion(hourly_congestion);
    let baseline = (100.0 - avg_congestion * 1.2).max(20.0);

    let green_area = summed_area(green_spaces.iter().map(|s| s.area), green_spaces.len(), FALLBACK_GREEN_AREA);
    let green_bonus = (green_area / area * 100.0 * 0.6).min(20.0);

    let total_roads = f64::from(inventory.categorized_total());
    let arterial_penalty = if total_roads > 0.0 {
        let arterial = f64::from(
            inventory.category_count(RoadCategory::Motorway)
                + inventory.category_count(RoadCategory::Primary),
        );
        arterial / total_roads * 15.0
    } else {
        0.0
    };

    (baseline + green_bonus - arterial_penalty).clamp(10.0, 95.0)
}

/// Noise score in `[10, 95]`, from per-category noise factors and
/// signal density. An area without categorized roads scores 80.
fn noise_score(inventory: &RoadInventory, controls: &TrafficControls, area: f64) -> f64 {
    let total_roads = f64::from(inventory.categorized_total());
    if total_roads == 0.0 {
        return 80.0;
    }

    let road_noise: f64 = inventory
        .by_category
        .iter()
        .map(|(category, &count)| f64::from(count) / total_roads * category.noise_factor() * 20.0)
        .sum();
    let signal_noise = (f64::from(controls.traffic_lights) / area * 3.0).min(10.0);

    (100.0 - (road_noise + signal_noise)).clamp(10.0, 95.0)
}

fn average_congestion(hourly_congestion: &[i32]) -> f64 {
    if hourly_congestion.is_empty() {
        return 30.0;
    }
    hourly_congestion.iter().map(|&v| f64::from(v)).sum::<f64>() / hourly_congestion.len() as f64
}
