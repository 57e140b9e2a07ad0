//! Traffic-control infrastructure counts.

use crate::model::{GeoElement, TrafficControls};

pub fn count_traffic_controls(elements: &[GeoElement]) -> TrafficControls {
    let mut controls = TrafficControls::default();

    for element in elements {
        match element {
            GeoElement::Node { tags, .. } => match tags.get("highway").map(String::as_str) {
                Some("traffic_signals") => controls.traffic_lights += 1,
                Some("stop") => controls.stop_signs += 1,
                Some("speed_camera") => controls.speed_cameras += 1,
                _ => {}
            },
            GeoElement::Way { tags, .. } => {
                if tags.get("junction").is_some_and(|v| v == "roundabout") {
                    controls.roundabouts += 1;
                }
            }
            GeoElement::Relation { .. } => {}
        }
    }

    controls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_nodes_and_roundabout_ways_distinctly() {
        let elements: Vec<GeoElement> = serde_json::from_str(
            r#"[
                {"type": "node", "id": 1, "lat": 0.0, "lon": 0.0,
                 "tags": {"highway": "traffic_signals"}},
                {"type": "node", "id": 2, "lat": 0.0, "lon": 0.0, "tags": {"highway": "stop"}},
                {"type": "node", "id": 3, "lat": 0.0, "lon": 0.0,
                 "tags": {"highway": "speed_camera"}},
                {"type": "way", "id": 4,
                 "tags": {"highway": "primary", "junction": "roundabout"}},
                {"type": "node", "id": 5, "lat": 0.0, "lon": 0.0,
                 "tags": {"junction": "roundabout"}}
            ]"#,
        )
        .unwrap();

        let controls = count_traffic_controls(&elements);
        assert_eq!(controls.traffic_lights, 1);
        assert_eq!(controls.stop_signs, 1);
        assert_eq!(controls.speed_cameras, 1);
        assert_eq!(controls.roundabouts, 1);
    }
}
