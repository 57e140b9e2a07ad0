//! Road extraction: highway ways with parsed length, lanes and speed.

use std::collections::BTreeMap;

use geo::Point;
use hashbrown::HashMap;
use itertools::Itertools;

use crate::geometry::{haversine_km, round2};
use crate::model::{GeoElement, Road, RoadCategory, Tags};

/// Roads of the box plus their category distribution.
///
/// `count` covers every highway way; `by_category` only ways landing in
/// one of the six buckets.
#[derive(Debug, Default)]
pub struct RoadInventory {
    pub roads: Vec<Road>,
    pub count: u32,
    pub by_category: BTreeMap<RoadCategory, u32>,
}

impl RoadInventory {
    pub fn categorized_total(&self) -> u32 {
        self.by_category.values().sum()
    }

    pub fn total_length_km(&self) -> f64 {
        self.roads.iter().map(|road| road.length_km).sum()
    }

    pub fn category_count(&self, category: RoadCategory) -> u32 {
        self.by_category.get(&category).copied().unwrap_or(0)
    }
}

pub fn extract_roads(
    elements: &[GeoElement],
    coords: &HashMap<i64, Point<f64>>,
) -> RoadInventory {
    let mut inventory = RoadInventory::default();

    for element in elements {
        let GeoElement::Way { id, nodes, tags } = element else {
            continue;
        };
        let Some(highway) = tags.get("highway") else {
            continue;
        };

        let category = RoadCategory::classify(highway, tags);
        inventory.roads.push(Road {
            id: *id,
            highway: highway.clone(),
            name: tags
                .get("name")
                .cloned()
                .unwrap_or_else(|| "Unnamed road".to_string()),
            length_km: round2(way_length_km(nodes, coords)),
            lanes: parse_lanes(tags),
            max_speed: parse_max_speed(tags),
            nodes: nodes.clone(),
            surface: tags
                .get("surface")
                .cloned()
                .unwrap_or_else(|| "unknown".to_string()),
            oneway: tags.get("oneway").is_some_and(|v| v == "yes"),
            category,
        });

        if let Some(category) = category {
            *inventory.by_category.entry(category).or_insert(0) += 1;
        }
        inventory.count += 1;
    }

    inventory
}

/// Sum of great-circle segment lengths over consecutive node pairs,
/// skipping pairs where either node is unresolvable.
fn way_length_km(nodes: &[i64], coords: &HashMap<i64, Point<f64>>) -> f64 {
    nodes
        .iter()
        .tuple_windows()
        .filter_map(|(a, b)| Some((coords.get(a)?, coords.get(b)?)))
        .map(|(a, b)| haversine_km(*a, *b))
        .sum()
}

/// Parse the `lanes` tag: plain number, "a-b" range (averaged with
/// integer division) or "a;b;c" list (maximum). Unparsable values fall
/// back to a subtype-based guess, an absent tag defaults to 2.
fn parse_lanes(tags: &Tags) -> u32 {
    let raw = tags.get("lanes").map_or("2", String::as_str);

    let parsed = if raw.contains('-') {
        let values: Option<Vec<u32>> = raw.split('-').map(|v| v.trim().parse().ok()).collect();
        values.filter(|v| !v.is_empty()).map(|v| v.iter().sum::<u32>() / v.len() as u32)
    } else if raw.contains(';') {
        let values: Option<Vec<u32>> = raw.split(';').map(|v| v.trim().parse().ok()).collect();
        values.and_then(|v| v.into_iter().max())
    } else {
        raw.parse().ok()
    };

    parsed.unwrap_or_else(|| match tags.get("highway").map(String::as_str) {
        Some("motorway" | "trunk") => 3,
        Some("primary" | "secondary") => 2,
        _ => 1,
    })
}

/// Leading numeric token of the `maxspeed` tag, e.g. "50 mph" -> 50.
fn parse_max_speed(tags: &Tags) -> Option<u32> {
    tags.get("maxspeed")?
        .split_whitespace()
        .next()?
        .parse()
        .ok()
}
