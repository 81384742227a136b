use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::BridgeError;

/// A position as reported by the host, in degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

/// What the map screen handed back when it closed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapScreenResult {
    /// `false` when the user left the map without confirming
    pub confirmed: bool,
    #[serde(default)]
    pub data: Option<MapScreenData>,
}

/// Payload of a confirmed map screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapScreenData {
    #[serde(default)]
    pub coordinates: Option<GeoPoint>,
}

pub(crate) fn parse_permission_results(raw: &str) -> Result<HashMap<String, bool>, BridgeError> {
    Ok(serde_json::from_str(raw)?)
}

pub(crate) fn parse_location(raw: &str) -> Result<Option<GeoPoint>, BridgeError> {
    Ok(serde_json::from_str(raw)?)
}

pub(crate) fn parse_map_result(raw: &str) -> Result<MapScreenResult, BridgeError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_permission_results() {
        let raw = r#"{"android.permission.CAMERA": true, "android.permission.BODY_SENSORS": false}"#;
        let results = parse_permission_results(raw).unwrap();
        assert_eq!(results.get("android.permission.CAMERA"), Some(&true));
        assert_eq!(results.get("android.permission.BODY_SENSORS"), Some(&false));
    }

    #[test]
    fn test_parse_location_without_fix() {
        assert_eq!(parse_location("null").unwrap(), None);
    }

    #[test]
    fn test_parse_location_with_fix() {
        let point = parse_location(r#"{"longitude": 15.64, "latitude": 46.55}"#)
            .unwrap()
            .unwrap();
        assert_eq!(point.longitude, 15.64);
        assert_eq!(point.latitude, 46.55);
    }

    #[test]
    fn test_parse_map_result_variants() {
        let confirmed =
            parse_map_result(r#"{"confirmed": true, "data": {"coordinates": {"longitude": 10.0, "latitude": 20.0}}}"#)
                .unwrap();
        assert!(confirmed.confirmed);
        assert_eq!(
            confirmed.data.unwrap().coordinates,
            Some(GeoPoint {
                longitude: 10.0,
                latitude: 20.0
            })
        );

        let no_coordinates = parse_map_result(r#"{"confirmed": true, "data": {}}"#).unwrap();
        assert_eq!(no_coordinates.data.unwrap().coordinates, None);

        let cancelled = parse_map_result(r#"{"confirmed": false}"#).unwrap();
        assert!(!cancelled.confirmed);
        assert!(cancelled.data.is_none());
    }

    #[test]
    fn test_garbage_is_protocol_error() {
        assert!(matches!(
            parse_map_result("not json"),
            Err(BridgeError::Protocol(_))
        ));
    }
}
