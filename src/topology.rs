//! Road topology: intersections found via shared node ids.

use geo::Point;
use hashbrown::HashMap;

use crate::model::{Intersections, Road, features::is_arterial_subtype};

/// Classify every node shared by at least three distinct roads.
///
/// Major: five or more roads, or any connected arterial. Complex:
/// exactly four. Simple: three without an arterial. Counted once per
/// node, never per road pair.
pub fn classify_intersections(
    roads: &[Road],
    coords: &HashMap<i64, Point<f64>>,
) -> Intersections {
    let mut connections: HashMap<i64, Vec<usize>> = HashMap::new();
    for (index, road) in roads.iter().enumerate() {
        for node_id in &road.nodes {
            if !coords.contains_key(node_id) {
                continue;
            }
            let entry = connections.entry(*node_id).or_default();
            // closed rings visit their first node twice
            if !entry.contains(&index) {
                entry.push(index);
            }
        }
    }

    let mut intersections = Intersections::default();
    for connected in connections.values() {
        if connected.len() < 3 {
            continue;
        }
        intersections.total += 1;

        let has_arterial = connected
            .iter()
            .any(|&index| is_arterial_subtype(&roads[index].highway));

        if connected.len() >= 5 || has_arterial {
            intersections.major += 1;
        } else if connected.len() == 4 {
            intersections.complex += 1;
        } else {
            intersections.simple += 1;
        }
    }

    intersections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RoadCategory, Tags};

    fn road(id: i64, highway: &str, nodes: &[i64]) -> Road {
        Road {
            id,
            highway: highway.to_string(),
            name: "Unnamed road".to_string(),
            length_km: 0.1,
            lanes: 2,
            max_speed: None,
            nodes: nodes.to_vec(),
            surface: "unknown".to_string(),
            oneway: false,
            category: RoadCategory::classify(highway, &Tags::new()),
        }
    }

    fn coords_for(ids: &[i64]) -> HashMap<i64, Point<f64>> {
        ids.iter()
            .map(|&id| (id, Point::new(30.0 + id as f64 * 0.001, 50.0)))
            .collect()
    }

    #[test]
    fn three_local_roads_make_a_simple_intersection() {
        let roads = vec![
            road(1, "residential", &[1, 2]),
            road(2, "residential", &[1, 3]),
            road(3, "service", &[1, 4]),
        ];
        let result = classify_intersections(&roads, &coords_for(&[1, 2, 3, 4]));

        assert_eq!(result.simple, 1);
        assert_eq!(result.complex, 0);
        assert_eq!(result.major, 0);
        assert_eq!(result.total, 1);
    }

    #[test]
    fn any_arterial_promotes_to_major() {
        let roads = vec![
            road(1, "residential", &[1, 2]),
            road(2, "residential", &[1, 3]),
            road(3, "primary", &[1, 4]),
        ];
        let result = classify_intersections(&roads, &coords_for(&[1, 2, 3, 4]));

        assert_eq!(result.major, 1);
        assert_eq!(result.simple, 0);
    }

    #[test]
    fn four_roads_are_complex_and_unresolved_nodes_do_not_join() {
        let roads = vec![
            road(1, "residential", &[1, 2]),
            road(2, "residential", &[1, 3]),
            road(3, "service", &[1, 4]),
            road(4, "unclassified", &[1, 5]),
            // shares only node 99, which has no coordinates
            road(5, "residential", &[99, 6]),
        ];
        let result = classify_intersections(&roads, &coords_for(&[1, 2, 3, 4, 5, 6]));

        assert_eq!(result.complex, 1);
        assert_eq!(result.total, 1);
    }

    #[test]
    fn closed_ring_counts_once_per_node() {
        let roads = vec![
            road(1, "residential", &[1, 2, 3, 1]),
            road(2, "residential", &[1, 4]),
        ];
        // node 1 connects two distinct roads only, no intersection
        let result = classify_intersections(&roads, &coords_for(&[1, 2, 3, 4]));
        assert_eq!(result.total, 0);
    }
}
