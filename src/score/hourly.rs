//! Area-type classification and the 24-hour congestion curve.

use std::collections::BTreeMap;

use super::factors;
use crate::model::{AreaType, Building, BuildingCategory};

/// Morning and evening rush hours get a flat 10% bump.
const RUSH_HOURS: [u32; 4] = [7, 8, 17, 18];

/// Keyword groups for area character, distinct from the building
/// factor table: raw types are matched, not normalized categories.
const COMMERCIAL_LIKE: [&str; 3] = ["office", "commercial", "retail"];
const RESIDENTIAL_LIKE: [&str; 3] = ["apartment", "residential", "house"];
const INSTITUTIONAL_LIKE: [&str; 3] = ["school", "university", "hospital"];
const INDUSTRIAL_LIKE: [&str; 2] = ["industrial", "warehouse"];

/// Classify the box as business, residential or mixed by raw building
/// type majority. A group must exceed 60% of the matched buildings to
/// dominate; institutional and industrial majorities stay mixed.
pub fn determine_area_type(buildings: &[Building]) -> AreaType {
    if buildings.is_empty() {
        return AreaType::Mixed;
    }

    let mut commercial = 0u32;
    let mut residential = 0u32;
    let mut institutional = 0u32;
    let mut industrial = 0u32;

    for building in buildings {
        let lowered = building.raw_type.to_lowercase();
        let matches = |keywords: &[&str]| keywords.iter().any(|k| lowered.contains(k));

        if matches(&COMMERCIAL_LIKE) {
            commercial += 1;
        } else if matches(&RESIDENTIAL_LIKE) {
            residential += 1;
        } else if matches(&INSTITUTIONAL_LIKE) {
            institutional += 1;
        } else if matches(&INDUSTRIAL_LIKE) {
            industrial += 1;
        }
    }

    let total = commercial + residential + institutional + industrial;
    if total == 0 {
        return AreaType::Mixed;
    }

    let dominant = [
        (AreaType::Business, commercial),
        (AreaType::Residential, residential),
        (AreaType::Mixed, institutional),
        (AreaType::Mixed, industrial),
    ]
    .into_iter()
    .fold((AreaType::Mixed, 0u32), |best, candidate| {
        if candidate.1 > best.1 { candidate } else { best }
    });

    if f64::from(dominant.1) / f64::from(total) > 0.6 {
        dominant.0
    } else {
        AreaType::Mixed
    }
}

/// Derive the 24-point congestion curve from the area pattern, the
/// buildings' declared peak hours and day/night adjustments. Every
/// value is truncated and clamped to `[5, 95]`.
pub fn hourly_congestion(
    area_type: AreaType,
    base_congestion: f64,
    building_impact: f64,
    buildings: &[Building],
) -> [i32; 24] {
    let pattern = factors::hourly_pattern(area_type);

    let mut category_counts: BTreeMap<BuildingCategory, u32> = BTreeMap::new();
    for building in buildings {
        *category_counts.entry(building.category()).or_insert(0) += 1;
    }

    let mut curve = [0i32; 24];
    for (hour, slot) in curve.iter_mut().enumerate() {
        let hour = hour as u32;
        let combined_factor =
            pattern[hour as usize] * (1.0 + peak_adjustment(hour, &category_counts));

        let mut level = (base_congestion + building_impact) * combined_factor;
        if RUSH_HOURS.contains(&hour) {
            level *= 1.1;
        } else if hour >= 22 || hour <= 5 {
            level *= 0.7;
        }

        *slot = (level as i32).clamp(5, 95);
    }

    curve
}

/// Upward adjustment from the share of buildings whose peak hours
/// include this hour, at most 0.5.
fn peak_adjustment(hour: u32, category_counts: &BTreeMap<BuildingCategory, u32>) -> f64 {
    let total: u32 = category_counts.values().sum();
    if total == 0 {
        return 0.0;
    }

    let adjustment: f64 = category_counts
        .iter()
        .filter(|(category, _)| category.peak_hours().contains(&hour))
        .map(|(_, &count)| f64::from(count) / f64::from(total) * 0.3)
        .sum();

    adjustment.min(0.5)
}
