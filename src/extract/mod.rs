//! Element classifiers: single-pass scans of the raw element set, one
//! per feature family. Every classifier degrades gracefully on missing
//! node references and unparsable tags.

mod buildings;
mod green;
mod parking;
mod roads;
mod traffic;
mod transit;

pub use buildings::extract_buildings;
pub use green::extract_green_and_water;
pub use parking::survey_parking;
pub use roads::{RoadInventory, extract_roads};
pub use traffic::count_traffic_controls;
pub use transit::count_transit_stops;
