use std::collections::HashMap;

use crate::config::BridgeConfig;
use crate::error::BridgeError;

/// Asks the user for the given Android permissions
///
/// Resolves once the system dialog is answered. The map contains one entry
/// per requested name; names the host left out count as denied.
#[cfg(target_os = "android")]
pub async fn request_permissions(
    config: &BridgeConfig,
    names: &[&str],
) -> Result<HashMap<String, bool>, BridgeError> {
    use crate::activity::{await_result, call_with_string, clear_slots, with_activity};

    let joined = names.join("\n");
    with_activity(config, |env, activity, cls| {
        clear_slots(env, cls)?;
        call_with_string(env, activity, "requestAppPermissions", &joined)
    })?;

    let raw = await_result(config, "getPermissionResults", None).await?;
    let mut results = crate::models::parse_permission_results(&raw)?;
    for name in names {
        results.entry((*name).to_string()).or_insert(false);
    }
    log::debug!("Bridge: permission results {:?}", results);
    Ok(results)
}

/// Checks a permission without prompting
#[cfg(target_os = "android")]
pub async fn is_permission_granted(config: &BridgeConfig, name: &str) -> Result<bool, BridgeError> {
    use crate::activity::with_activity;
    use jni::objects::{JObject, JValue};

    with_activity(config, |env, activity, _cls| {
        let jname = env
            .new_string(name)
            .map_err(|e| BridgeError::Other(format!("new_string failed: {}", e)))?;
        env.call_method(
            activity,
            "checkAppPermission",
            "(Ljava/lang/String;)Z",
            &[JValue::Object(&JObject::from(jname))],
        )
        .map_err(|e| BridgeError::Other(format!("checkAppPermission failed: {}", e)))?
        .z()
        .map_err(|e| BridgeError::Other(format!("Boolean conversion failed: {}", e)))
    })
}

// Desktop targets have no runtime permission model
#[cfg(not(target_os = "android"))]
pub async fn request_permissions(
    _config: &BridgeConfig,
    names: &[&str],
) -> Result<HashMap<String, bool>, BridgeError> {
    Ok(names.iter().map(|name| ((*name).to_string(), true)).collect())
}

#[cfg(not(target_os = "android"))]
pub async fn is_permission_granted(_config: &BridgeConfig, _name: &str) -> Result<bool, BridgeError> {
    Ok(true)
}
