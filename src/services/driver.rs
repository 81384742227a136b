use std::collections::VecDeque;

use super::capabilities::{LocationProvider, PermissionBroker, Presenter, ScreenLauncher};
use crate::controller::{Effect, MainController, UiEvent};
use crate::models::Permission;

/// Runs the main screen: feeds events into the controller, executes the
/// returned effects against the platform and loops platform answers back in.
///
/// One event is processed at a time; follow-up events produced while
/// running effects are queued behind it.
pub struct MainScreenDriver<D, P> {
    controller: MainController,
    device: D,
    presenter: P,
}

impl<D, P> MainScreenDriver<D, P>
where
    D: PermissionBroker + LocationProvider + ScreenLauncher,
    P: Presenter,
{
    pub fn new(device: D, presenter: P) -> Self {
        Self {
            controller: MainController::new(),
            device,
            presenter,
        }
    }

    #[cfg(test)]
    pub fn controller(&self) -> &MainController {
        &self.controller
    }

    #[cfg(test)]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn start(&mut self) {
        self.controller.start();
        self.presenter.render(&self.controller.view());
    }

    pub async fn dispatch(&mut self, event: UiEvent) {
        let mut queue = VecDeque::from([event]);

        while let Some(event) = queue.pop_front() {
            log::debug!("MainScreen: handling {:?}", event);
            let effects = self.controller.handle(event);
            self.presenter.render(&self.controller.view());

            for effect in effects {
                if let Some(follow_up) = self.run(effect).await {
                    queue.push_back(follow_up);
                }
            }
        }
    }

    async fn run(&mut self, effect: Effect) -> Option<UiEvent> {
        match effect {
            Effect::RequestPermissions {
                request,
                permissions,
            } => match self.device.request_permissions(&permissions).await {
                Ok(grants) => Some(UiEvent::PermissionResult { request, grants }),
                Err(e) => Some(UiEvent::EffectFailed(e.to_string())),
            },
            Effect::QueryLocation => {
                if !self.location_permitted().await {
                    log::info!("MainScreen: no location permission, skipping lookup");
                    return None;
                }
                match self.device.last_known_location().await {
                    Ok(location) => Some(UiEvent::LocationResult(location)),
                    Err(e) => Some(UiEvent::EffectFailed(e.to_string())),
                }
            }
            Effect::OpenPhotoScreen(launch) => match self.device.open_photo_screen(&launch).await {
                Ok(()) => None,
                Err(e) => Some(UiEvent::EffectFailed(e.to_string())),
            },
            Effect::OpenMapScreen(at) => match self.device.open_map_screen(at).await {
                Ok(result) => Some(UiEvent::MapResult(result)),
                Err(e) => Some(UiEvent::EffectFailed(e.to_string())),
            },
            Effect::Toast(message) => {
                self.presenter.toast(message);
                None
            }
            Effect::Dialog { message, blocking } => {
                self.presenter.dialog(message, blocking);
                None
            }
            Effect::Finish => {
                if let Err(e) = self.device.finish_screen() {
                    log::warn!("MainScreen: could not close host screen: {}", e);
                }
                None
            }
        }
    }

    async fn location_permitted(&self) -> bool {
        for permission in [Permission::FineLocation, Permission::CoarseLocation] {
            match self.device.is_granted(permission).await {
                Ok(true) => return true,
                Ok(false) => {}
                Err(e) => log::warn!("MainScreen: checking {:?} failed: {}", permission, e),
            }
        }
        false
    }
}
