//! Building extraction with type resolution and capacity estimation.

use geo::Point;
use hashbrown::HashMap;

use crate::geometry::polygon_area_km2;
use crate::model::{Building, GeoElement, Tags};

pub fn extract_buildings(
    elements: &[GeoElement],
    coords: &HashMap<i64, Point<f64>>,
) -> Vec<Building> {
    elements
        .iter()
        .filter(|element| element.is_area_candidate())
        .filter(|element| element.tags().contains_key("building"))
        .map(|element| {
            let tags = element.tags();
            let nodes = element.node_refs().to_vec();
            let levels = parse_levels(tags);

            Building {
                id: element.id(),
                raw_type: resolve_raw_type(tags),
                name: tags
                    .get("name")
                    .cloned()
                    .unwrap_or_else(|| "Unnamed building".to_string()),
                levels,
                capacity_estimate: f64::from(levels) * nodes.len() as f64 / 4.0,
                area: polygon_area_km2(&nodes, coords),
                nodes,
            }
        })
        .collect()
}

/// Tag precedence for the raw building type. Empty values fall through
/// like absent ones.
fn resolve_raw_type(tags: &Tags) -> String {
    ["amenity", "building:use", "shop", "office", "building"]
        .iter()
        .find_map(|key| tags.get(*key).filter(|v| !v.is_empty()))
        .cloned()
        .unwrap_or_else(|| "unknown".to_string())
}

fn parse_levels(tags: &Tags) -> u32 {
    tags.get("building:levels")
        .and_then(|v| v.parse().ok())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BuildingCategory;

    fn tags(pairs: &[(&str, &str)]) -> Tags {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn raw_type_follows_tag_precedence() {
        assert_eq!(
            resolve_raw_type(&tags(&[("building", "yes"), ("shop", "supermarket")])),
            "supermarket"
        );
        assert_eq!(
            resolve_raw_type(&tags(&[("building", "yes"), ("amenity", "school"), ("shop", "mall")])),
            "school"
        );
        assert_eq!(resolve_raw_type(&tags(&[("building", "yes")])), "yes");
        assert_eq!(resolve_raw_type(&Tags::new()), "unknown");
    }

    #[test]
    fn levels_default_to_one_on_garbage() {
        assert_eq!(parse_levels(&tags(&[("building:levels", "5")])), 5);
        assert_eq!(parse_levels(&tags(&[("building:levels", "2.5")])), 1);
        assert_eq!(parse_levels(&Tags::new()), 1);
    }

    #[test]
    fn extracts_ways_and_relations_with_capacity_estimate() {
        let elements: Vec<GeoElement> = serde_json::from_str(
            r#"[
                {"type": "node", "id": 1, "lat": 50.0, "lon": 30.0},
                {"type": "node", "id": 2, "lat": 50.0, "lon": 30.001},
                {"type": "node", "id": 3, "lat": 50.001, "lon": 30.001},
                {"type": "node", "id": 4, "lat": 50.001, "lon": 30.0},
                {"type": "way", "id": 20, "nodes": [1, 2, 3, 4],
                 "tags": {"building": "yes", "building:use": "office", "building:levels": "3"}},
                {"type": "relation", "id": 21, "tags": {"building": "apartments"}},
                {"type": "way", "id": 22, "nodes": [1, 2], "tags": {"highway": "service"}}
            ]"#,
        )
        .unwrap();

        let coords = crate::model::node_index(&elements);
        let buildings = extract_buildings(&elements, &coords);

        assert_eq!(buildings.len(), 2);
        assert_eq!(buildings[0].category(), BuildingCategory::Office);
        assert_eq!(buildings[0].levels, 3);
        assert_eq!(buildings[0].capacity_estimate, 3.0);
        assert!(buildings[0].area.is_some());

        // relation: no resolvable ring, no area, zero capacity
        assert_eq!(buildings[1].category(), BuildingCategory::Apartments);
        assert_eq!(buildings[1].area, None);
        assert_eq!(buildings[1].capacity_estimate, 0.0);
    }
}
