use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::models::GeoPoint;

/// Last known device location, `None` when location services have no fix
#[cfg(target_os = "android")]
pub async fn last_known_location(config: &BridgeConfig) -> Result<Option<GeoPoint>, BridgeError> {
    use crate::activity::{await_result, clear_slots, with_activity};

    with_activity(config, |env, activity, cls| {
        clear_slots(env, cls)?;
        env.call_method(activity, "requestLastLocation", "()V", &[])
            .map_err(|e| BridgeError::Other(format!("requestLastLocation failed: {}", e)))?;
        Ok(())
    })?;

    let raw = await_result(config, "getLastLocation", Some(config.result_timeout)).await?;
    crate::models::parse_location(&raw)
}

#[cfg(not(target_os = "android"))]
pub async fn last_known_location(_config: &BridgeConfig) -> Result<Option<GeoPoint>, BridgeError> {
    Err(BridgeError::PlatformNotSupported(
        "Device location not available on this platform".to_string(),
    ))
}
