use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::models::MapScreenResult;

/// Starts the photo screen; `extras_json` carries the launch parameters
#[cfg(target_os = "android")]
pub async fn open_photo_screen(config: &BridgeConfig, extras_json: &str) -> Result<(), BridgeError> {
    use crate::activity::{call_with_string, with_activity};

    with_activity(config, |env, activity, _cls| {
        call_with_string(env, activity, "launchPhotoScreen", extras_json)
    })
}

/// Starts the map screen and waits until it is closed
#[cfg(target_os = "android")]
pub async fn open_map_screen(
    config: &BridgeConfig,
    extras_json: &str,
) -> Result<MapScreenResult, BridgeError> {
    use crate::activity::{await_result, call_with_string, clear_slots, with_activity};

    with_activity(config, |env, activity, cls| {
        clear_slots(env, cls)?;
        call_with_string(env, activity, "launchMapScreen", extras_json)
    })?;

    let raw = await_result(config, "getMapResult", None).await?;
    crate::models::parse_map_result(&raw)
}

/// Closes the host activity
#[cfg(target_os = "android")]
pub fn finish_activity(config: &BridgeConfig) -> Result<(), BridgeError> {
    use crate::activity::with_activity;

    with_activity(config, |env, activity, _cls| {
        env.call_method(activity, "finish", "()V", &[])
            .map_err(|e| BridgeError::Other(format!("finish failed: {}", e)))?;
        Ok(())
    })
}

#[cfg(not(target_os = "android"))]
pub async fn open_photo_screen(_config: &BridgeConfig, _extras_json: &str) -> Result<(), BridgeError> {
    Err(BridgeError::PlatformNotSupported(
        "Photo screen not available on this platform".to_string(),
    ))
}

#[cfg(not(target_os = "android"))]
pub async fn open_map_screen(
    _config: &BridgeConfig,
    _extras_json: &str,
) -> Result<MapScreenResult, BridgeError> {
    Err(BridgeError::PlatformNotSupported(
        "Map screen not available on this platform".to_string(),
    ))
}

#[cfg(not(target_os = "android"))]
pub fn finish_activity(_config: &BridgeConfig) -> Result<(), BridgeError> {
    Err(BridgeError::PlatformNotSupported(
        "No host activity on this platform".to_string(),
    ))
}
