use std::fmt;

use crate::controller::Message;
use crate::models::Permission;

/// Central error types for the Eatical app
#[derive(Debug)]
pub enum AppError {
    /// The user refused a runtime permission
    PermissionDenied(Permission),
    /// Location services returned no position
    LocationUnavailable,
    /// The map screen confirmed without coordinates
    MissingMapResult,
    /// The map screen confirmed without any payload
    MissingMapPayload,
    /// Platform call failed
    Bridge(device_bridge::BridgeError),
    /// Configuration file could not be parsed
    Config(String),
    /// Filesystem error
    Filesystem(std::io::Error),
    /// General error
    #[allow(dead_code)]
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::PermissionDenied(p) => write!(f, "Permission denied: {}", p.android_name()),
            AppError::LocationUnavailable => write!(f, "Device location unavailable"),
            AppError::MissingMapResult => write!(f, "Map result is missing coordinates"),
            AppError::MissingMapPayload => write!(f, "Map result is missing data"),
            AppError::Bridge(e) => write!(f, "Device error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Filesystem(e) => write!(f, "Filesystem error: {}", e),
            AppError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<device_bridge::BridgeError> for AppError {
    fn from(e: device_bridge::BridgeError) -> Self {
        AppError::Bridge(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Filesystem(e)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Other(format!("JSON error: {}", e))
    }
}

/// User-facing message for the error, translated by the UI
impl AppError {
    pub fn user_message(&self) -> Message {
        match self {
            AppError::PermissionDenied(p) => Message::PermissionDenied(*p),
            AppError::LocationUnavailable => Message::LocationUnavailable,
            AppError::MissingMapResult => Message::MissingMapCoordinates,
            AppError::MissingMapPayload => Message::MissingMapData,
            other => Message::DeviceError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_errors_become_messages() {
        assert_eq!(
            AppError::MissingMapResult.user_message(),
            Message::MissingMapCoordinates
        );
        assert_eq!(
            AppError::MissingMapPayload.user_message(),
            Message::MissingMapData
        );
    }

    #[test]
    fn test_bridge_error_keeps_detail() {
        let err = AppError::from(device_bridge::BridgeError::Timeout("getMapResult".to_string()));
        match err.user_message() {
            Message::DeviceError(detail) => assert!(detail.contains("getMapResult")),
            other => panic!("unexpected message {:?}", other),
        }
    }
}
