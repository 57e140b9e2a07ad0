//! The assembled analysis report returned to callers.

use std::collections::BTreeMap;

use serde::Serialize;

use super::features::{
    Building, GreenSpace, Intersections, ParkingStats, Road, RoadCategory, TrafficControls,
    WaterFeature,
};

/// Dominant land-use character of the analyzed box, driving the hourly
/// congestion pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaType {
    Business,
    Residential,
    Mixed,
}

/// Summary of the most significant road of the box. Named roads win
/// over unnamed ones regardless of length.
#[derive(Debug, Clone, Serialize)]
pub struct LongestRoad {
    pub name: String,
    pub length: f64,
    #[serde(rename = "type")]
    pub highway: String,
    pub lanes: u32,
}

impl LongestRoad {
    pub fn no_data() -> Self {
        Self {
            name: "No data".to_string(),
            length: 0.0,
            highway: "unknown".to_string(),
            lanes: 0,
        }
    }
}

/// Per-component breakdown of the headline congestion value. The
/// relief term is reported negated, as it subtracts from the total.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CongestionDetails {
    pub base_road_congestion: f64,
    pub building_impact: f64,
    pub parking_impact: f64,
    pub transport_relief: f64,
}

/// Complete urban-quality report for one bounding box.
///
/// Headline scores are clamped integers: `congestion` and `ecology`
/// within `[5, 95]`, `pedestrian_friendly` and `public_transport`
/// within `[10, 95]`; every hourly value within `[5, 95]`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// `[[north, west], [south, east]]`
    pub bounds: [[f64; 2]; 2],
    /// Box area, km².
    pub area: f64,
    pub area_type: AreaType,
    pub road_count: u32,
    /// Counts of categorized roads only; unrecognized highway subtypes
    /// contribute to `road_count` but to no bucket.
    pub road_types: BTreeMap<RoadCategory, u32>,
    pub intersections: Intersections,
    #[serde(flatten)]
    pub traffic_controls: TrafficControls,
    pub parking_spots: u32,
    pub longest_road: LongestRoad,
    pub congestion: i32,
    pub congestion_details: CongestionDetails,
    pub ecology: i32,
    pub pedestrian_friendly: i32,
    pub public_transport: i32,
    pub hourly_congestion: [i32; 24],
    pub roads_data: Vec<Road>,
    pub green_spaces_data: Vec<GreenSpace>,
    pub water_features_data: Vec<WaterFeature>,
    pub buildings_data: Vec<Building>,
    pub parking_data: ParkingStats,
}
