//! Green-space and water-feature extraction.
//!
//! Green is checked first: an element never lands in both families.

use geo::Point;
use hashbrown::HashMap;

use crate::geometry::polygon_area_km2;
use crate::model::{GeoElement, GreenSpace, Tags, WaterFeature};

pub fn extract_green_and_water(
    elements: &[GeoElement],
    coords: &HashMap<i64, Point<f64>>,
) -> (Vec<GreenSpace>, Vec<WaterFeature>) {
    let mut green_spaces = Vec::new();
    let mut water_features = Vec::new();

    for element in elements {
        if !element.is_area_candidate() {
            continue;
        }
        let tags = element.tags();
        let area = polygon_area_km2(element.node_refs(), coords);

        if is_green(tags) {
            green_spaces.push(GreenSpace {
                id: element.id(),
                kind: green_kind(tags),
                name: tags
                    .get("name")
                    .cloned()
                    .unwrap_or_else(|| "Unnamed green space".to_string()),
                area,
            });
        } else if is_water(tags) {
            water_features.push(WaterFeature {
                id: element.id(),
                kind: water_kind(tags),
                name: tags
                    .get("name")
                    .cloned()
                    .unwrap_or_else(|| "Unnamed water feature".to_string()),
                area,
            });
        }
    }

    (green_spaces, water_features)
}

fn is_green(tags: &Tags) -> bool {
    tag_in(tags, "leisure", &["park", "garden", "nature_reserve"])
        || tag_in(tags, "natural", &["wood", "forest", "scrub"])
        || tag_in(tags, "landuse", &["forest", "meadow", "grass", "recreation_ground"])
}

fn is_water(tags: &Tags) -> bool {
    tag_in(tags, "natural", &["water", "coastline"])
        || tag_in(tags, "waterway", &["river", "stream", "canal"])
}

fn tag_in(tags: &Tags, key: &str, allowed: &[&str]) -> bool {
    tags.get(key)
        .is_some_and(|v| allowed.iter().any(|&a| a == v))
}

fn green_kind(tags: &Tags) -> String {
    ["leisure", "natural", "landuse"]
        .iter()
        .find_map(|key| tags.get(*key))
        .cloned()
        .unwrap_or_default()
}

fn water_kind(tags: &Tags) -> String {
    ["waterway", "natural"]
        .iter()
        .find_map(|key| tags.get(*key))
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_green_and_water_exclusively() {
        let elements: Vec<GeoElement> = serde_json::from_str(
            r#"[
                {"type": "way", "id": 1, "tags": {"leisure": "park", "name": "Central Park"}},
                {"type": "way", "id": 2, "tags": {"waterway": "river"}},
                {"type": "way", "id": 3, "tags": {"leisure": "park", "natural": "water"}},
                {"type": "way", "id": 4, "tags": {"leisure": "pitch"}},
                {"type": "node", "id": 5, "lat": 0.0, "lon": 0.0, "tags": {"natural": "wood"}}
            ]"#,
        )
        .unwrap();

        let coords = HashMap::new();
        let (green, water) = extract_green_and_water(&elements, &coords);

        // element 3 matches both rule sets but green wins; the node is skipped
        assert_eq!(green.len(), 2);
        assert_eq!(water.len(), 1);
        assert_eq!(green[0].name, "Central Park");
        assert_eq!(water[0].kind, "river");
        assert_eq!(water[0].name, "Unnamed water feature");
        assert_eq!(green[0].area, None);
    }
}
