//! Impact calculators and score aggregation.
//!
//! Every calculator is a pure function of its feature collections and
//! treats empty input as a documented default, never an error.

pub mod access;
pub mod congestion;
pub mod ecology;
pub mod factors;
pub mod hourly;

pub use access::{pedestrian_score, transit_score};
pub use congestion::{
    base_road_congestion, building_impact, final_congestion, parking_impact, transit_relief,
};
pub use ecology::ecology_score;
pub use hourly::{determine_area_type, hourly_congestion};
