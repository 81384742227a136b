use crate::models::{
    Category, Coordinates, MapResult, Permission, PermissionGrants, PermissionRequest, PhotoLaunch,
};

/// Everything the main screen reacts to: user input and platform answers
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Splash work is done
    Loaded,
    CategoryClicked(Category),
    CameraPressed,
    GalleryPressed,
    IntervalShooterPressed,
    MapPressed,
    ResetPressed,
    PermissionResult {
        request: PermissionRequest,
        grants: PermissionGrants,
    },
    LocationResult(Option<Coordinates>),
    MapResult(MapResult),
    DialogDismissed,
    /// A platform call behind an effect failed
    EffectFailed(String),
}

/// Side effects requested by the controller
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    RequestPermissions {
        request: PermissionRequest,
        permissions: Vec<Permission>,
    },
    QueryLocation,
    OpenPhotoScreen(PhotoLaunch),
    OpenMapScreen(Coordinates),
    Toast(Message),
    /// A blocking dialog ends the screen once dismissed
    Dialog { message: Message, blocking: bool },
    Finish,
}

/// User-facing texts; the UI resolves them through Fluent
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    SelectCategory,
    LocationUpdated(Coordinates),
    MapLocationUpdated(Coordinates),
    DeviceLocationUsed,
    PermissionDenied(Permission),
    LocationUnavailable,
    MissingMapCoordinates,
    MissingMapData,
    DeviceError(String),
}

impl Message {
    /// Fluent message id
    pub fn key(&self) -> &'static str {
        match self {
            Message::SelectCategory => "select-category",
            Message::LocationUpdated(_) => "location-updated",
            Message::MapLocationUpdated(_) => "map-location-updated",
            Message::DeviceLocationUsed => "device-location-used",
            Message::PermissionDenied(p) => match p {
                Permission::FineLocation | Permission::CoarseLocation => {
                    "location-permission-denied"
                }
                Permission::Camera => "camera-permission-denied",
                Permission::ReadExternalStorage => "gallery-permission-denied",
                Permission::BodySensors => "body-sensors-permission-denied",
            },
            Message::LocationUnavailable => "location-unavailable",
            Message::MissingMapCoordinates => "map-missing-coordinates",
            Message::MissingMapData => "map-missing-data",
            Message::DeviceError(_) => "device-error",
        }
    }
}
