//! Input boundary: parsing provider payloads into [`GeoElement`]s.
//!
//! The crate never fetches map data itself; callers hand over the JSON
//! body returned by an Overpass-style query service.

use std::path::Path;

use serde::Deserialize;

use crate::error::Error;
use crate::model::GeoElement;

#[derive(Deserialize)]
struct ElementPayload {
    #[serde(default)]
    elements: Vec<GeoElement>,
}

/// Parse a provider payload of the form `{"elements": [...]}`.
///
/// # Errors
///
/// Returns an error when the payload is not valid JSON or an element
/// does not match the input contract.
pub fn elements_from_json(raw: &str) -> Result<Vec<GeoElement>, Error> {
    let payload: ElementPayload = serde_json::from_str(raw)?;
    Ok(payload.elements)
}

/// Read and parse a payload stored on disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn elements_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<GeoElement>, Error> {
    let raw = std::fs::read_to_string(path)?;
    elements_from_json(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_payload_and_defaults_missing_elements() {
        let elements = elements_from_json(r#"{"elements": [{"type": "node", "id": 7, "lat": 1.0, "lon": 2.0}]}"#)
            .unwrap();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].id(), 7);

        assert!(elements_from_json("{}").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_payload() {
        assert!(elements_from_json("not json").is_err());
        assert!(elements_from_json(r#"{"elements": [{"type": "node"}]}"#).is_err());
    }
}
