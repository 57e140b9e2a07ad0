//! Pedestrian-friendliness and transit accessibility scores.

use super::factors;
use crate::extract::RoadInventory;
use crate::model::{RoadCategory, TransitStops};

/// Pedestrian score in `[10, 95]` from the share of pedestrian, cycle
/// and local roads. An area without categorized roads scores a neutral
/// 50.
pub fn pedestrian_score(inventory: &RoadInventory) -> i32 {
    let total = f64::from(inventory.categorized_total());
    if total == 0.0 {
        return 50;
    }

    let percentage =
        |category: RoadCategory| f64::from(inventory.category_count(category)) / total * 100.0;

    let score = percentage(RoadCategory::Pedestrian) * 3.0
        + percentage(RoadCategory::Cycleway) * 2.0
        + percentage(RoadCategory::Local) * 0.5;

    (score as i32).clamp(10, 95)
}

/// Transit accessibility in `[10, 95]`: the relief-weighted stop count
/// scaled by 5.
pub fn transit_score(stops: &TransitStops) -> i32 {
    ((factors::weighted_stop_count(stops) * 5.0) as i32).clamp(10, 95)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_roads;
    use crate::model::{GeoElement, node_index};

    fn inventory_of(subtypes: &[&str]) -> RoadInventory {
        let mut elements = vec![
            serde_json::json!({"type": "node", "id": 1, "lat": 50.0, "lon": 30.0}),
            serde_json::json!({"type": "node", "id": 2, "lat": 50.001, "lon": 30.0}),
        ];
        for (i, subtype) in subtypes.iter().enumerate() {
            elements.push(serde_json::json!({
                "type": "way", "id": 100 + i, "nodes": [1, 2],
                "tags": {"highway": subtype}
            }));
        }
        let elements: Vec<GeoElement> =
            serde_json::from_value(serde_json::Value::Array(elements)).unwrap();
        let coords = node_index(&elements);
        extract_roads(&elements, &coords)
    }

    #[test]
    fn walkable_mix_scores_high() {
        let inventory = inventory_of(&["footway", "footway", "cycleway", "residential"]);
        // 50% x 3 + 25% x 2 + 25% x 0.5 = 212.5 -> clamped
        assert_eq!(pedestrian_score(&inventory), 95);
    }

    #[test]
    fn car_centric_mix_hits_the_floor() {
        let inventory = inventory_of(&["motorway", "primary", "secondary"]);
        assert_eq!(pedestrian_score(&inventory), 10);

        assert_eq!(pedestrian_score(&RoadInventory::default()), 50);
    }

    #[test]
    fn transit_score_scales_and_clamps() {
        assert_eq!(transit_score(&TransitStops::default()), 10);

        let modest = TransitStops {
            bus_stops: 5,
            ..Default::default()
        };
        assert_eq!(transit_score(&modest), 20);

        let hub = TransitStops {
            metro_stations: 10,
            ..Default::default()
        };
        assert_eq!(transit_score(&hub), 95);
    }
}
