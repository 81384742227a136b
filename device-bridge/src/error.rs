#[derive(Debug, Clone, PartialEq)]
pub enum BridgeError {
    Timeout(String),
    PlatformNotSupported(String),
    /// The host answered with something that is not the expected JSON
    Protocol(String),
    Other(String),
}

impl std::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BridgeError::Timeout(msg) => write!(f, "Timeout: {}", msg),
            BridgeError::PlatformNotSupported(msg) => write!(f, "Platform not supported: {}", msg),
            BridgeError::Protocol(msg) => write!(f, "Unexpected host response: {}", msg),
            BridgeError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for BridgeError {}

impl From<serde_json::Error> for BridgeError {
    fn from(e: serde_json::Error) -> Self {
        BridgeError::Protocol(e.to_string())
    }
}
