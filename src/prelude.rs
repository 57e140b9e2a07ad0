// Re-export key components
pub use crate::analyze::analyze_area;
pub use crate::error::Error;
pub use crate::loading::{elements_from_file, elements_from_json};
pub use crate::model::{
    AnalysisReport, AreaType, BoundingBox, Building, GeoElement, GreenSpace, Intersections,
    ParkingStats, Road, RoadCategory, TrafficControls, TransitStops, WaterFeature,
};
