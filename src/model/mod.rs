//! Data model: raw input elements, extracted urban features and the
//! final analysis report.

pub mod elements;
pub mod features;
pub mod report;

pub use elements::{GeoElement, Tags, node_index};
pub use features::{
    Building, BuildingCategory, GreenSpace, Intersections, ParkingStats, Road, RoadCategory,
    TrafficControls, TransitStops, WaterFeature,
};
pub use report::{AnalysisReport, AreaType, CongestionDetails, LongestRoad};

use serde::Serialize;

/// Rectangular geographic extent under analysis, degrees.
///
/// Invariant after construction: `north >= south` and `east >= west`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    /// Build a normalized box from two opposite corners given as
    /// `(lat, lon)` pairs, in either order.
    pub fn from_corners(a: (f64, f64), b: (f64, f64)) -> Self {
        Self {
            north: a.0.max(b.0),
            south: a.0.min(b.0),
            east: a.1.max(b.1),
            west: a.1.min(b.1),
        }
    }
}
