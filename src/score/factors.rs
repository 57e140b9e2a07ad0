//! Fixed heuristic tables behind the scoring pipeline.
//!
//! All values are empirical legacy constants preserved for output
//! stability; none of them is calibrated against measured traffic.

use crate::model::{AreaType, BuildingCategory, RoadCategory, TransitStops};

/// Highest per-road congestion factor, the normalization ceiling of the
/// base congestion formula.
pub const MAX_CONGESTION_FACTOR: f64 = 4.2;

impl RoadCategory {
    /// Relative congestion contribution of one road of this bucket.
    pub fn congestion_factor(self) -> f64 {
        match self {
            Self::Motorway => 4.2,
            Self::Primary => 3.8,
            Self::Secondary => 2.2,
            Self::Local => 1.0,
            Self::Pedestrian => 0.1,
            Self::Cycleway => 0.2,
        }
    }

    /// Nominal throughput, vehicles per hour.
    pub fn capacity(self) -> f64 {
        match self {
            Self::Motorway => 2000.0,
            Self::Primary => 1500.0,
            Self::Secondary => 800.0,
            Self::Local => 400.0,
            Self::Pedestrian => 50.0,
            Self::Cycleway => 100.0,
        }
    }

    /// Air-pollution weight of the transport environmental impact.
    pub fn pollution_factor(self) -> f64 {
        match self {
            Self::Motorway => 4.5,
            Self::Primary => 3.5,
            Self::Secondary => 2.0,
            Self::Local => 1.0,
            Self::Pedestrian => 0.1,
            Self::Cycleway => 0.2,
        }
    }

    pub fn noise_factor(self) -> f64 {
        match self {
            Self::Motorway => 4.0,
            Self::Primary => 3.0,
            Self::Secondary => 2.0,
            Self::Local => 1.0,
            Self::Pedestrian => 0.1,
            Self::Cycleway => 0.2,
        }
    }
}

impl BuildingCategory {
    /// Base traffic-generation factor of the category.
    pub fn base_factor(self) -> f64 {
        match self {
            Self::Office => 2.2,
            Self::Retail => 2.0,
            Self::School => 2.5,
            Self::University => 2.2,
            Self::Hospital => 1.9,
            Self::Industrial => 1.6,
            Self::Apartments => 1.5,
            Self::Restaurant => 1.7,
            Self::Shopping => 2.4,
            Self::Default => 1.0,
        }
    }

    /// Per-capacity-unit multiplier on top of the base factor.
    pub fn capacity_multiplier(self) -> f64 {
        match self {
            Self::Office => 0.1,
            Self::Retail => 0.12,
            Self::School => 0.15,
            Self::University => 0.12,
            Self::Hospital => 0.08,
            Self::Industrial => 0.05,
            Self::Apartments => 0.03,
            Self::Restaurant => 0.25,
            Self::Shopping => 0.18,
            Self::Default => 0.02,
        }
    }

    /// Hours at which the category generates its peak traffic. Empty
    /// for categories with flat profiles (hospitals run around the
    /// clock).
    pub fn peak_hours(self) -> &'static [u32] {
        match self {
            Self::Office => &[7, 8, 9, 17, 18, 19],
            Self::Retail => &[10, 11, 12, 16, 17, 18, 19, 20, 21],
            Self::School => &[7, 8, 13, 14, 15, 16],
            Self::University => &[8, 9, 10, 16, 17, 18],
            Self::Hospital => &[],
            Self::Industrial => &[6, 7, 8, 16, 17, 18],
            Self::Apartments => &[7, 8, 9, 17, 18, 19],
            Self::Restaurant => &[12, 13, 19, 20, 21],
            Self::Shopping => &[10, 11, 12, 16, 17, 18, 19, 20],
            Self::Default => &[],
        }
    }
}

const BUSINESS_PATTERN: [f64; 24] = [
    0.2, 0.1, 0.1, 0.1, 0.1, 0.2, 0.4, 1.8, 2.4, 2.0, 1.2, 1.3, 1.4, 1.3, 1.2, 1.4, 1.8, 2.5,
    2.3, 1.6, 0.8, 0.6, 0.4, 0.3,
];

const RESIDENTIAL_PATTERN: [f64; 24] = [
    0.3, 0.2, 0.1, 0.1, 0.2, 0.4, 0.8, 1.6, 1.9, 1.2, 0.8, 0.9, 1.1, 1.0, 1.1, 1.3, 1.5, 1.9,
    2.0, 1.4, 1.0, 0.8, 0.6, 0.4,
];

const MIXED_PATTERN: [f64; 24] = [
    0.25, 0.15, 0.1, 0.1, 0.15, 0.3, 0.6, 1.7, 2.1, 1.6, 1.0, 1.1, 1.25, 1.15, 1.15, 1.35, 1.65,
    2.2, 2.15, 1.5, 0.9, 0.7, 0.5, 0.35,
];

/// Hour-by-hour demand multipliers for the area character.
pub fn hourly_pattern(area_type: AreaType) -> &'static [f64; 24] {
    match area_type {
        AreaType::Business => &BUSINESS_PATTERN,
        AreaType::Residential => &RESIDENTIAL_PATTERN,
        AreaType::Mixed => &MIXED_PATTERN,
    }
}

/// Nominal daily vehicles per km of a single lane, by raw subtype.
pub fn traffic_intensity(highway: &str) -> f64 {
    match highway {
        "motorway" => 1500.0,
        "trunk" => 1200.0,
        "primary" => 800.0,
        "secondary" => 500.0,
        "tertiary" => 300.0,
        "residential" => 150.0,
        "service" => 100.0,
        _ => 200.0,
    }
}

/// Weighted stop count shared by transit relief and the transit
/// accessibility score: bus 0.8, tram 1.5, metro 3.0, train 2.0.
pub fn weighted_stop_count(stops: &TransitStops) -> f64 {
    f64::from(stops.bus_stops) * 0.8
        + f64::from(stops.tram_stops) * 1.5
        + f64::from(stops.metro_stations) * 3.0
        + f64::from(stops.train_stations) * 2.0
}
