use device_bridge::{BridgeConfig, BridgeError};

use super::capabilities::{LocationProvider, PermissionBroker, ScreenLauncher};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::{Coordinates, MapResult, Permission, PermissionGrants, PhotoLaunch};

/// Platform capabilities backed by the device bridge
#[derive(Debug, Clone)]
pub struct DeviceServices {
    bridge: BridgeConfig,
    fallback_location: Option<Coordinates>,
}

impl DeviceServices {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            bridge: config.bridge_config(),
            fallback_location: config.fallback_location,
        }
    }
}

impl PermissionBroker for DeviceServices {
    async fn request_permissions(
        &self,
        permissions: &[Permission],
    ) -> Result<PermissionGrants, AppError> {
        let names: Vec<&str> = permissions.iter().map(|p| p.android_name()).collect();
        let answers = device_bridge::request_permissions(&self.bridge, &names).await?;

        let grants = answers
            .iter()
            .filter_map(|(name, granted)| match Permission::from_android_name(name) {
                Some(permission) => Some((permission, *granted)),
                None => {
                    log::warn!("Device: ignoring answer for unrequested {}", name);
                    None
                }
            })
            .collect();
        Ok(grants)
    }

    async fn is_granted(&self, permission: Permission) -> Result<bool, AppError> {
        Ok(device_bridge::is_permission_granted(&self.bridge, permission.android_name()).await?)
    }
}

impl LocationProvider for DeviceServices {
    async fn last_known_location(&self) -> Result<Option<Coordinates>, AppError> {
        match device_bridge::last_known_location(&self.bridge).await {
            Ok(point) => Ok(point.map(Coordinates::from)),
            Err(BridgeError::PlatformNotSupported(msg)) => match self.fallback_location {
                Some(fallback) => {
                    log::info!("Device: {}, using configured location {}", msg, fallback);
                    Ok(Some(fallback))
                }
                None => Err(BridgeError::PlatformNotSupported(msg).into()),
            },
            Err(e) => Err(e.into()),
        }
    }
}

impl ScreenLauncher for DeviceServices {
    async fn open_photo_screen(&self, launch: &PhotoLaunch) -> Result<(), AppError> {
        let extras = serde_json::to_string(launch)?;
        device_bridge::open_photo_screen(&self.bridge, &extras).await?;
        Ok(())
    }

    async fn open_map_screen(&self, at: Coordinates) -> Result<MapResult, AppError> {
        let extras = serde_json::to_string(&at)?;
        let result = device_bridge::open_map_screen(&self.bridge, &extras).await?;
        Ok(MapResult::from(result))
    }

    fn finish_screen(&self) -> Result<(), AppError> {
        Ok(device_bridge::finish_activity(&self.bridge)?)
    }
}

#[cfg(all(test, not(target_os = "android")))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_desktop_permissions_are_granted() {
        let services = DeviceServices::new(&AppConfig::default());
        let grants = services
            .request_permissions(&[Permission::FineLocation, Permission::CoarseLocation])
            .await
            .unwrap();
        assert_eq!(grants.get(&Permission::FineLocation), Some(&true));
        assert_eq!(grants.get(&Permission::CoarseLocation), Some(&true));
    }

    #[tokio::test]
    async fn test_desktop_location_uses_fallback() {
        let config = AppConfig {
            fallback_location: Some(Coordinates::new(15.64, 46.55)),
            ..AppConfig::default()
        };
        let services = DeviceServices::new(&config);
        assert_eq!(
            services.last_known_location().await.unwrap(),
            Some(Coordinates::new(15.64, 46.55))
        );
    }

    #[tokio::test]
    async fn test_desktop_location_without_fallback_fails() {
        let services = DeviceServices::new(&AppConfig::default());
        assert!(matches!(
            services.last_known_location().await,
            Err(AppError::Bridge(BridgeError::PlatformNotSupported(_)))
        ));
    }

    #[tokio::test]
    async fn test_desktop_has_no_map_screen() {
        let services = DeviceServices::new(&AppConfig::default());
        assert!(services.open_map_screen(Coordinates::default()).await.is_err());
    }
}
