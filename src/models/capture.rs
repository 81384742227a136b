use serde::{Deserialize, Serialize};

use super::{Category, Coordinates};

/// How the photo screen obtains its picture
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CaptureSource {
    Camera,
    Gallery,
    IntervalShooter,
}

/// Capture mode waiting for the camera permission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PendingAction {
    #[default]
    None,
    Camera,
    IntervalShooter,
}

impl PendingAction {
    pub fn source(&self) -> Option<CaptureSource> {
        match self {
            PendingAction::None => None,
            PendingAction::Camera => Some(CaptureSource::Camera),
            PendingAction::IntervalShooter => Some(CaptureSource::IntervalShooter),
        }
    }
}

/// Parameters handed to the photo screen
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PhotoLaunch {
    pub source: CaptureSource,
    pub category: Category,
    pub longitude: f64,
    pub latitude: f64,
}

impl PhotoLaunch {
    pub fn new(source: CaptureSource, category: Category, at: Coordinates) -> Self {
        Self {
            source,
            category,
            longitude: at.longitude,
            latitude: at.latitude,
        }
    }
}
