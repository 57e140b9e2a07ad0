//! Deterministic urban-quality analysis over OSM-style map elements.
//!
//! Given a bounding box and a collection of already-fetched geographic
//! elements (Overpass JSON shape), the crate extracts typed features
//! (roads, buildings, green and water areas, parking, transit stops),
//! analyzes road topology and derives four headline scores plus a 24-hour
//! congestion curve. The whole pipeline is a pure function of its inputs:
//! identical input always yields an identical [`AnalysisReport`].
//!
//! Fetching map data, persisting reports and rendering belong to the
//! callers; see [`loading`] for the input boundary.

pub mod analyze;
pub mod error;
pub mod extract;
pub mod geometry;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod score;
pub mod topology;

pub use analyze::analyze_area;
pub use error::Error;
pub use loading::{elements_from_file, elements_from_json};
pub use model::{AnalysisReport, BoundingBox, GeoElement};
