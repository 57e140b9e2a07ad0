//! Raw geographic elements as delivered by the external data provider
//! (Overpass JSON shape).

use geo::Point;
use hashbrown::HashMap;
use serde::Deserialize;

/// Open key/value annotations of an element. Absence of any key is
/// routine, not an error.
pub type Tags = HashMap<String, String>;

/// A single element of the provider payload.
///
/// Ways may reference node ids that are absent from the element set;
/// downstream consumers resolve references through [`node_index`] and
/// skip what does not resolve. Relation members are not resolved at
/// all: a relation contributes its tags only.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GeoElement {
    Node {
        id: i64,
        // Tag-only nodes without coordinates occur in real payloads.
        lat: Option<f64>,
        lon: Option<f64>,
        #[serde(default)]
        tags: Tags,
    },
    Way {
        id: i64,
        #[serde(default)]
        nodes: Vec<i64>,
        #[serde(default)]
        tags: Tags,
    },
    Relation {
        id: i64,
        #[serde(default)]
        tags: Tags,
    },
}

impl GeoElement {
    pub fn id(&self) -> i64 {
        match self {
            Self::Node { id, .. } | Self::Way { id, .. } | Self::Relation { id, .. } => *id,
        }
    }

    pub fn tags(&self) -> &Tags {
        match self {
            Self::Node { tags, .. } | Self::Way { tags, .. } | Self::Relation { tags, .. } => tags,
        }
    }

    /// Node ids of a way, empty for nodes and relations.
    pub fn node_refs(&self) -> &[i64] {
        match self {
            Self::Way { nodes, .. } => nodes,
            _ => &[],
        }
    }

    pub fn is_area_candidate(&self) -> bool {
        matches!(self, Self::Way { .. } | Self::Relation { .. })
    }
}

/// Index node ids to `(lon, lat)` points for every node that carries
/// both coordinates.
pub fn node_index(elements: &[GeoElement]) -> HashMap<i64, Point<f64>> {
    elements
        .iter()
        .filter_map(|element| match element {
            GeoElement::Node {
                id,
                lat: Some(lat),
                lon: Some(lon),
                ..
            } => Some((*id, Point::new(*lon, *lat))),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_overpass_shapes() {
        let raw = r#"[
            {"type": "node", "id": 1, "lat": 50.0, "lon": 30.0},
            {"type": "node", "id": 4, "tags": {"public_transport": "stop_position"}},
            {"type": "way", "id": 2, "nodes": [1, 4], "tags": {"highway": "primary"}},
            {"type": "relation", "id": 3, "tags": {"building": "yes"}}
        ]"#;

        let elements: Vec<GeoElement> = serde_json::from_str(raw).unwrap();
        assert_eq!(elements.len(), 4);
        assert_eq!(elements[2].node_refs(), &[1, 4]);
        assert_eq!(elements[3].tags().get("building").unwrap(), "yes");

        // only the node with both coordinates resolves
        let index = node_index(&elements);
        assert_eq!(index.len(), 1);
        assert!(index.contains_key(&1));
    }
}
