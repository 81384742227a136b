use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;
use crate::models::Coordinates;

pub const CONFIG_FILE_NAME: &str = "eatical.toml";

/// App settings read from `eatical.toml` in the app data directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Host activity class in slash form
    pub main_activity_class: String,
    pub result_timeout_secs: u64,
    pub poll_interval_ms: u64,
    /// Served by the location provider where the platform has none
    pub fallback_location: Option<Coordinates>,
    pub locale: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let bridge = device_bridge::BridgeConfig::default();
        Self {
            main_activity_class: bridge.main_activity_class,
            result_timeout_secs: bridge.result_timeout.as_secs(),
            poll_interval_ms: bridge.poll_interval.as_millis() as u64,
            fallback_location: None,
            locale: "en-US".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_toml(s: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(s)?)
    }

    pub fn bridge_config(&self) -> device_bridge::BridgeConfig {
        device_bridge::BridgeConfig {
            main_activity_class: self.main_activity_class.clone(),
            result_timeout: Duration::from_secs(self.result_timeout_secs),
            poll_interval: Duration::from_millis(self.poll_interval_ms.max(1)),
        }
    }
}

/// The app's private files directory, as reported by the Android context
#[cfg(target_os = "android")]
fn data_dir() -> Result<PathBuf, AppError> {
    use jni::objects::{JObject, JString};
    use jni::JavaVM;

    let jni_error = |e: jni::errors::Error| AppError::Other(format!("JNI error: {}", e));

    let ctx = ndk_context::android_context();
    let vm = unsafe { JavaVM::from_raw(ctx.vm().cast()) }.map_err(jni_error)?;
    let mut env = vm.attach_current_thread().map_err(jni_error)?;
    let context = unsafe { JObject::from_raw(ctx.context().cast()) };

    let dir = env
        .call_method(&context, "getFilesDir", "()Ljava/io/File;", &[])
        .and_then(|v| v.l())
        .map_err(jni_error)?;
    let path = env
        .call_method(&dir, "getAbsolutePath", "()Ljava/lang/String;", &[])
        .and_then(|v| v.l())
        .map_err(jni_error)?;
    let path: String = env.get_string(&JString::from(path)).map_err(jni_error)?.into();
    Ok(PathBuf::from(path))
}

#[cfg(not(target_os = "android"))]
fn data_dir() -> Result<PathBuf, AppError> {
    Ok(PathBuf::from("./data"))
}

pub fn config_path() -> Result<PathBuf, AppError> {
    Ok(data_dir()?.join(CONFIG_FILE_NAME))
}

/// Reads the config file; a missing file yields the defaults
pub fn load() -> Result<AppConfig, AppError> {
    let path = config_path()?;
    if !path.exists() {
        log::debug!("Config: {} not found, using defaults", path.display());
        return Ok(AppConfig::default());
    }
    let raw = std::fs::read_to_string(&path)?;
    AppConfig::from_toml(&raw)
}

pub fn load_or_default() -> AppConfig {
    match load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Config: {}, falling back to defaults", e);
            AppConfig::default()
        }
    }
}
