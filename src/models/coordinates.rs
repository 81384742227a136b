use serde::{Deserialize, Serialize};
use std::fmt;

/// A longitude/latitude pair in degrees
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.longitude, self.latitude)
    }
}

impl From<device_bridge::GeoPoint> for Coordinates {
    fn from(point: device_bridge::GeoPoint) -> Self {
        Self::new(point.longitude, point.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_origin() {
        assert_eq!(Coordinates::default(), Coordinates::new(0.0, 0.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinates::new(10.5, -20.25).to_string(), "(10.5, -20.25)");
    }
}
