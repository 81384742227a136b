use super::Coordinates;

/// Outcome of the map screen
#[derive(Debug, Clone, PartialEq)]
pub enum MapResult {
    /// The user confirmed a location; the payload may still be incomplete
    Confirmed(Option<MapData>),
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapData {
    pub coordinates: Option<Coordinates>,
}

impl From<device_bridge::MapScreenResult> for MapResult {
    fn from(result: device_bridge::MapScreenResult) -> Self {
        if !result.confirmed {
            return MapResult::Cancelled;
        }
        MapResult::Confirmed(result.data.map(|data| MapData {
            coordinates: data.coordinates.map(Coordinates::from),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use device_bridge::{GeoPoint, MapScreenData, MapScreenResult};

    #[test]
    fn test_from_bridge_result() {
        let confirmed = MapScreenResult {
            confirmed: true,
            data: Some(MapScreenData {
                coordinates: Some(GeoPoint {
                    longitude: 10.0,
                    latitude: 20.0,
                }),
            }),
        };
        assert_eq!(
            MapResult::from(confirmed),
            MapResult::Confirmed(Some(MapData {
                coordinates: Some(Coordinates::new(10.0, 20.0))
            }))
        );

        // data is ignored once the user cancelled
        let cancelled = MapScreenResult {
            confirmed: false,
            data: Some(MapScreenData { coordinates: None }),
        };
        assert_eq!(MapResult::from(cancelled), MapResult::Cancelled);
    }
}
