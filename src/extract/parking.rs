//! Parking supply survey: dedicated lots plus tagged street parking.

use crate::model::{GeoElement, ParkingStats};

/// Default spot count for a lot without a parsable `capacity` tag.
const DEFAULT_LOT_CAPACITY: u32 = 20;
/// Flat spot contribution of one street-parking way.
const STREET_SEGMENT_SPOTS: u32 = 5;

pub fn survey_parking(elements: &[GeoElement]) -> ParkingStats {
    let mut stats = ParkingStats::default();

    for element in elements {
        let tags = element.tags();

        if tags.get("amenity").is_some_and(|v| v == "parking") {
            stats.lots += 1;
            stats.total_spots += tags
                .get("capacity")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_LOT_CAPACITY);

            if tags.get("parking").is_some_and(|v| v == "underground") {
                stats.underground_lots += 1;
            } else {
                stats.surface_lots += 1;
            }
        } else if tags.contains_key("highway")
            && tags.keys().any(|key| key.starts_with("parking:lane"))
        {
            stats.street_segments += 1;
            stats.total_spots += STREET_SEGMENT_SPOTS;
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_lot_capacity_and_street_segments() {
        let elements: Vec<GeoElement> = serde_json::from_str(
            r#"[
                {"type": "way", "id": 1, "tags": {"amenity": "parking", "capacity": "40"}},
                {"type": "way", "id": 2,
                 "tags": {"highway": "residential", "parking:lane:right": "parallel"}}
            ]"#,
        )
        .unwrap();

        let stats = survey_parking(&elements);
        assert_eq!(stats.total_spots, 45);
        assert_eq!(stats.lots, 1);
        assert_eq!(stats.surface_lots, 1);
        assert_eq!(stats.street_segments, 1);
    }

    #[test]
    fn unparsable_capacity_defaults_and_underground_is_bucketed() {
        let elements: Vec<GeoElement> = serde_json::from_str(
            r#"[
                {"type": "way", "id": 1,
                 "tags": {"amenity": "parking", "capacity": "lots", "parking": "underground"}},
                {"type": "node", "id": 2, "lat": 0.0, "lon": 0.0, "tags": {"amenity": "parking"}}
            ]"#,
        )
        .unwrap();

        let stats = survey_parking(&elements);
        assert_eq!(stats.total_spots, 40);
        assert_eq!(stats.underground_lots, 1);
        assert_eq!(stats.surface_lots, 1);
        assert_eq!(stats.lots, 2);
    }
}
