//! Typed urban features extracted from the raw element set, and the
//! ordered classification chains that assign them.
//!
//! All classification chains are first-match-wins: reordering the rules
//! changes outcomes and is a behavioral change, not a refactoring.

use serde::Serialize;

use super::Tags;

/// The six road buckets of the report, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadCategory {
    Motorway,
    Primary,
    Secondary,
    Local,
    Pedestrian,
    Cycleway,
}

impl RoadCategory {
    pub const ALL: [RoadCategory; 6] = [
        Self::Motorway,
        Self::Primary,
        Self::Secondary,
        Self::Local,
        Self::Pedestrian,
        Self::Cycleway,
    ];

    /// Assign a highway way to a bucket. A way also qualifies as a
    /// cycleway via `bicycle=designated` when no earlier bucket claimed
    /// its subtype.
    pub fn classify(highway: &str, tags: &Tags) -> Option<Self> {
        let subtype = |category: Self| Self::subtypes(category).iter().any(|&s| s == highway);

        for category in Self::ALL {
            let designated = category == Self::Cycleway
                && tags.get("bicycle").is_some_and(|v| v == "designated");
            if subtype(category) || designated {
                return Some(category);
            }
        }
        None
    }

    fn subtypes(category: Self) -> &'static [&'static str] {
        match category {
            Self::Motorway => &["motorway", "motorway_link"],
            Self::Primary => &["trunk", "trunk_link", "primary", "primary_link"],
            Self::Secondary => &["secondary", "secondary_link", "tertiary", "tertiary_link"],
            Self::Local => &["residential", "service", "unclassified", "living_street"],
            Self::Pedestrian => &["pedestrian", "footway", "path", "steps", "walkway"],
            Self::Cycleway => &["cycleway"],
        }
    }
}

/// Arterial subtypes drive intersection severity and the air-quality
/// penalty. Note: link roads do not count.
pub fn is_arterial_subtype(highway: &str) -> bool {
    matches!(highway, "motorway" | "trunk" | "primary")
}

/// A highway way with its parsed attributes.
#[derive(Debug, Clone, Serialize)]
pub struct Road {
    pub id: i64,
    /// Raw highway subtype, e.g. `primary_link`.
    #[serde(rename = "type")]
    pub highway: String,
    pub name: String,
    /// Great-circle length over resolvable node pairs, km, rounded.
    #[serde(rename = "length")]
    pub length_km: f64,
    pub lanes: u32,
    pub max_speed: Option<u32>,
    pub nodes: Vec<i64>,
    pub surface: String,
    pub oneway: bool,
    #[serde(skip)]
    pub category: Option<RoadCategory>,
}

impl Road {
    pub fn is_named(&self) -> bool {
        self.name != "Unnamed road"
    }
}

/// Normalized building category with fixed impact factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BuildingCategory {
    Office,
    Retail,
    School,
    University,
    Hospital,
    Industrial,
    Apartments,
    Restaurant,
    Shopping,
    Default,
}

impl BuildingCategory {
    pub const ALL: [BuildingCategory; 10] = [
        Self::Office,
        Self::Retail,
        Self::School,
        Self::University,
        Self::Hospital,
        Self::Industrial,
        Self::Apartments,
        Self::Restaurant,
        Self::Shopping,
        Self::Default,
    ];

    /// Keyword-containment normalization of a raw building type. The
    /// rule order is significant: "shopping" contains "shop" and lands
    /// in retail, only "department_store" reaches the shopping bucket.
    pub fn normalize(raw_type: &str) -> Self {
        let lowered = raw_type.to_lowercase();
        let matches = |keywords: &[&str]| keywords.iter().any(|k| lowered.contains(k));

        if matches(&["office", "commercial"]) {
            Self::Office
        } else if matches(&["retail", "shop", "mall", "supermarket"]) {
            Self::Retail
        } else if matches(&["school", "kindergarten"]) {
            Self::School
        } else if matches(&["university", "college"]) {
            Self::University
        } else if matches(&["hospital", "clinic", "medical"]) {
            Self::Hospital
        } else if matches(&["industrial", "warehouse", "factory"]) {
            Self::Industrial
        } else if matches(&["apartments", "residential"]) {
            Self::Apartments
        } else if matches(&["restaurant", "cafe", "fast_food"]) {
            Self::Restaurant
        } else if matches(&["shopping", "department_store"]) {
            Self::Shopping
        } else {
            Self::Default
        }
    }
}

/// A building footprint with its estimated traffic-generation inputs.
#[derive(Debug, Clone, Serialize)]
pub struct Building {
    pub id: i64,
    /// Raw type resolved by tag precedence, before normalization.
    #[serde(rename = "type")]
    pub raw_type: String,
    pub name: String,
    pub nodes: Vec<i64>,
    pub levels: u32,
    /// Heuristic floor capacity: levels x node count / 4.
    #[serde(skip)]
    pub capacity_estimate: f64,
    /// Footprint area in km², `None` for degenerate rings.
    pub area: Option<f64>,
}

impl Building {
    pub fn category(&self) -> BuildingCategory {
        BuildingCategory::normalize(&self.raw_type)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GreenSpace {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub area: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WaterFeature {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub area: Option<f64>,
}

/// Aggregate parking supply over the whole box.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ParkingStats {
    pub total_spots: u32,
    #[serde(rename = "surface_parking")]
    pub surface_lots: u32,
    #[serde(rename = "underground_parking")]
    pub underground_lots: u32,
    #[serde(rename = "street_parking")]
    pub street_segments: u32,
    #[serde(rename = "parking_lots")]
    pub lots: u32,
}

/// Public-transport stop counts by mode.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct TransitStops {
    pub bus_stops: u32,
    pub tram_stops: u32,
    pub metro_stations: u32,
    pub train_stations: u32,
    pub total_stops: u32,
}

/// Traffic-control infrastructure counts.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct TrafficControls {
    pub traffic_lights: u32,
    pub stop_signs: u32,
    pub speed_cameras: u32,
    pub roundabouts: u32,
}

/// Intersection counts bucketed by complexity.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Intersections {
    pub simple: u32,
    pub complex: u32,
    pub major: u32,
    pub total: u32,
}
