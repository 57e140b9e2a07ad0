//! Public-transport stop counts by mode.
//!
//! A node lands in exactly one mode, first match wins: bus, tram, then
//! rail (split into metro and mainline by the `station` tag).

use crate::model::{GeoElement, TransitStops};

pub fn count_transit_stops(elements: &[GeoElement]) -> TransitStops {
    let mut stops = TransitStops::default();

    for element in elements {
        let GeoElement::Node { tags, .. } = element else {
            continue;
        };

        if tags.get("highway").is_some_and(|v| v == "bus_stop")
            || tags.get("public_transport").is_some_and(|v| v == "stop_position")
        {
            stops.bus_stops += 1;
        } else if tags.get("railway").is_some_and(|v| v == "tram_stop") {
            stops.tram_stops += 1;
        } else if tags.get("railway").is_some_and(|v| v == "station") {
            if tags.get("station").is_some_and(|v| v == "subway") {
                stops.metro_stations += 1;
            } else {
                stops.train_stations += 1;
            }
        }
    }

    stops.total_stops =
        stops.bus_stops + stops.tram_stops + stops.metro_stations + stops.train_stations;
    stops
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_are_mutually_exclusive_per_node() {
        let elements: Vec<GeoElement> = serde_json::from_str(
            r#"[
                {"type": "node", "id": 1, "lat": 0.0, "lon": 0.0,
                 "tags": {"highway": "bus_stop", "railway": "tram_stop"}},
                {"type": "node", "id": 2, "lat": 0.0, "lon": 0.0,
                 "tags": {"public_transport": "stop_position"}},
                {"type": "node", "id": 3, "lat": 0.0, "lon": 0.0,
                 "tags": {"railway": "station", "station": "subway"}},
                {"type": "node", "id": 4, "lat": 0.0, "lon": 0.0,
                 "tags": {"railway": "station"}},
                {"type": "way", "id": 5, "tags": {"railway": "station"}}
            ]"#,
        )
        .unwrap();

        let stops = count_transit_stops(&elements);
        assert_eq!(stops.bus_stops, 2);
        assert_eq!(stops.tram_stops, 0);
        assert_eq!(stops.metro_stations, 1);
        assert_eq!(stops.train_stations, 1);
        assert_eq!(stops.total_stops, 4);
    }
}
