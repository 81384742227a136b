use std::collections::VecDeque;

use super::{Effect, Message, SessionState, UiEvent};
use crate::error::AppError;
use crate::models::{
    CaptureSource, Category, Coordinates, MainState, MapResult, PendingAction, Permission,
    PermissionGrants, PermissionRequest, PhotoLaunch,
};

/// Snapshot of everything the main screen renders
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenView {
    pub state: MainState,
    pub category: Option<Category>,
    pub coordinates: Coordinates,
    pub finished: bool,
}

impl ScreenView {
    pub fn splash_visible(&self) -> bool {
        self.state == MainState::Loading
    }
}

/// Permission and navigation state machine of the main screen
///
/// The controller never talks to the platform itself. Each call to
/// [`MainController::handle`] updates the state and returns the effects the
/// caller has to run; platform answers come back in as further events.
#[derive(Debug, Default)]
pub struct MainController {
    state: MainState,
    session: SessionState,
    /// States to enter one after another, e.g. camera after body sensors
    chained: VecDeque<MainState>,
    blocking_dialog_open: bool,
    finished: bool,
}

impl MainController {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn state(&self) -> MainState {
        self.state
    }

    #[cfg(test)]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn view(&self) -> ScreenView {
        ScreenView {
            state: self.state,
            category: self.session.category(),
            coordinates: self.session.coordinates,
            finished: self.finished,
        }
    }

    /// Shows the splash; the location flow starts on [`UiEvent::Loaded`]
    pub fn start(&mut self) {
        if self.state != MainState::Initial {
            log::warn!("MainScreen: start() called twice, state is {:?}", self.state);
            return;
        }
        self.state = MainState::Loading;
    }

    pub fn handle(&mut self, event: UiEvent) -> Vec<Effect> {
        if self.finished {
            log::debug!("MainScreen: screen finished, dropping {:?}", event);
            return Vec::new();
        }

        match event {
            UiEvent::Loaded => {
                if self.state == MainState::Loading {
                    self.enter(MainState::GettingLocationPermission)
                } else {
                    log::debug!("MainScreen: Loaded outside of Loading ({:?})", self.state);
                    Vec::new()
                }
            }
            UiEvent::CategoryClicked(category) => {
                self.session.select_category(category);
                Vec::new()
            }
            UiEvent::CameraPressed => {
                self.session.pending_action = PendingAction::Camera;
                self.enter_with_category(MainState::GettingCameraPermission)
            }
            UiEvent::GalleryPressed => self.enter_with_category(MainState::GettingGalleryPermission),
            UiEvent::IntervalShooterPressed => {
                self.session.pending_action = PendingAction::IntervalShooter;
                self.enter_with_category(MainState::GettingBodySensorsPermission)
            }
            UiEvent::MapPressed => self.enter(MainState::ChooseLocation),
            UiEvent::ResetPressed => self.enter(MainState::ResetLocation),
            UiEvent::PermissionResult { request, grants } => {
                self.on_permission_result(request, &grants)
            }
            UiEvent::LocationResult(location) => self.on_location(location),
            UiEvent::MapResult(result) => self.on_map_result(result),
            UiEvent::DialogDismissed => {
                if std::mem::take(&mut self.blocking_dialog_open) {
                    log::info!("MainScreen: blocking dialog dismissed, finishing");
                    self.finished = true;
                    vec![Effect::Finish]
                } else {
                    Vec::new()
                }
            }
            UiEvent::EffectFailed(detail) => {
                log::error!("MainScreen: effect failed in {:?}: {}", self.state, detail);
                vec![self.dialog(Message::DeviceError(detail), false)]
            }
        }
    }

    fn enter_with_category(&mut self, next: MainState) -> Vec<Effect> {
        if self.session.category().is_none() {
            log::debug!("MainScreen: no category selected, staying in {:?}", self.state);
            return vec![Effect::Toast(Message::SelectCategory)];
        }
        self.enter(next)
    }

    fn enter(&mut self, next: MainState) -> Vec<Effect> {
        self.chained.push_back(next);
        self.run_chain()
    }

    fn run_chain(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        while let Some(next) = self.chained.pop_front() {
            log::info!("MainScreen: {:?} -> {:?}", self.state, next);
            self.state = next;
            effects.extend(self.on_enter(next));
        }
        effects
    }

    fn on_enter(&self, state: MainState) -> Vec<Effect> {
        let request = |request: PermissionRequest| Effect::RequestPermissions {
            request,
            permissions: request.permissions(),
        };

        match state {
            MainState::Initial | MainState::Loading => Vec::new(),
            MainState::GettingLocationPermission => vec![request(PermissionRequest::Location)],
            MainState::GettingCameraPermission => vec![request(PermissionRequest::Camera)],
            MainState::GettingGalleryPermission => vec![request(PermissionRequest::Gallery)],
            MainState::GettingBodySensorsPermission => {
                vec![request(PermissionRequest::BodySensors)]
            }
            MainState::ChooseLocation => vec![Effect::OpenMapScreen(self.session.coordinates)],
            MainState::ResetLocation => vec![Effect::QueryLocation],
        }
    }

    fn on_permission_result(
        &mut self,
        request: PermissionRequest,
        grants: &PermissionGrants,
    ) -> Vec<Effect> {
        let granted = request.is_satisfied_by(grants);
        log::info!("MainScreen: {:?} permission granted: {}", request, granted);

        match (request, granted) {
            (PermissionRequest::Location, true) => vec![Effect::QueryLocation],
            (PermissionRequest::Location, false) => {
                vec![self.fail(AppError::PermissionDenied(Permission::FineLocation), true)]
            }
            (PermissionRequest::Camera, true) => {
                match std::mem::take(&mut self.session.pending_action).source() {
                    Some(source) => self.open_photo_screen(source),
                    None => {
                        log::debug!("MainScreen: camera granted without pending action");
                        Vec::new()
                    }
                }
            }
            (PermissionRequest::Camera, false) => {
                vec![self.fail(AppError::PermissionDenied(Permission::Camera), false)]
            }
            (PermissionRequest::Gallery, true) => self.open_photo_screen(CaptureSource::Gallery),
            (PermissionRequest::Gallery, false) => {
                vec![self.fail(AppError::PermissionDenied(Permission::ReadExternalStorage), false)]
            }
            (PermissionRequest::BodySensors, true) => {
                self.chained.push_back(MainState::GettingCameraPermission);
                self.run_chain()
            }
            (PermissionRequest::BodySensors, false) => {
                vec![self.fail(AppError::PermissionDenied(Permission::BodySensors), false)]
            }
        }
    }

    fn open_photo_screen(&self, source: CaptureSource) -> Vec<Effect> {
        match self.session.category() {
            Some(category) => {
                let launch = PhotoLaunch::new(source, category, self.session.coordinates);
                log::info!("MainScreen: opening photo screen {:?}", launch);
                vec![Effect::OpenPhotoScreen(launch)]
            }
            None => {
                log::warn!("MainScreen: category vanished before photo screen launch");
                vec![Effect::Toast(Message::SelectCategory)]
            }
        }
    }

    fn on_location(&mut self, location: Option<Coordinates>) -> Vec<Effect> {
        match location {
            Some(coordinates) => {
                log::info!("MainScreen: device location {}", coordinates);
                self.session.coordinates = coordinates;
                vec![Effect::Toast(Message::LocationUpdated(coordinates))]
            }
            None => vec![self.fail(AppError::LocationUnavailable, true)],
        }
    }

    fn on_map_result(&mut self, result: MapResult) -> Vec<Effect> {
        match self.apply_map_result(result) {
            Ok(Some(coordinates)) => vec![Effect::Toast(Message::MapLocationUpdated(coordinates))],
            Ok(None) => {
                log::info!("MainScreen: no map selection, keeping {}", self.session.coordinates);
                vec![Effect::Toast(Message::DeviceLocationUsed)]
            }
            Err(e) => vec![self.fail(e, false)],
        }
    }

    fn apply_map_result(&mut self, result: MapResult) -> Result<Option<Coordinates>, AppError> {
        let data = match result {
            MapResult::Cancelled => return Ok(None),
            MapResult::Confirmed(data) => data.ok_or(AppError::MissingMapPayload)?,
        };
        let coordinates = data.coordinates.ok_or(AppError::MissingMapResult)?;
        self.session.coordinates = coordinates;
        Ok(Some(coordinates))
    }

    fn fail(&mut self, error: AppError, blocking: bool) -> Effect {
        log::warn!("MainScreen: {} (blocking: {})", error, blocking);
        self.dialog(error.user_message(), blocking)
    }

    fn dialog(&mut self, message: Message, blocking: bool) -> Effect {
        if blocking {
            self.blocking_dialog_open = true;
        }
        Effect::Dialog { message, blocking }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MapData;

    fn grants(request: PermissionRequest, granted: bool) -> UiEvent {
        UiEvent::PermissionResult {
            request,
            grants: request.permissions().into_iter().map(|p| (p, granted)).collect(),
        }
    }

    fn loaded_controller() -> MainController {
        let mut controller = MainController::new();
        controller.start();
        controller.handle(UiEvent::Loaded);
        controller
    }

    #[test]
    fn test_start_shows_splash_then_requests_location() {
        let mut controller = MainController::new();
        assert_eq!(controller.state(), MainState::Initial);

        controller.start();
        assert!(controller.view().splash_visible());

        let effects = controller.handle(UiEvent::Loaded);
        assert_eq!(controller.state(), MainState::GettingLocationPermission);
        assert_eq!(
            effects,
            vec![Effect::RequestPermissions {
                request: PermissionRequest::Location,
                permissions: vec![Permission::FineLocation, Permission::CoarseLocation],
            }]
        );
    }

    #[test]
    fn test_actions_without_category_are_blocked() {
        for event in [
            UiEvent::CameraPressed,
            UiEvent::GalleryPressed,
            UiEvent::IntervalShooterPressed,
        ] {
            let mut controller = loaded_controller();
            let before = controller.state();
            let effects = controller.handle(event);
            assert_eq!(controller.state(), before);
            assert_eq!(effects, vec![Effect::Toast(Message::SelectCategory)]);
        }
    }

    #[test]
    fn test_pending_action_recorded_even_when_blocked() {
        let mut controller = loaded_controller();
        controller.handle(UiEvent::IntervalShooterPressed);
        assert_eq!(controller.session().pending_action, PendingAction::IntervalShooter);
    }

    #[test]
    fn test_location_grant_queries_once() {
        let mut controller = loaded_controller();
        let effects = controller.handle(grants(PermissionRequest::Location, true));
        assert_eq!(effects, vec![Effect::QueryLocation]);
    }

    #[test]
    fn test_coarse_location_alone_is_enough() {
        let mut controller = loaded_controller();
        let effects = controller.handle(UiEvent::PermissionResult {
            request: PermissionRequest::Location,
            grants: PermissionGrants::from([
                (Permission::FineLocation, false),
                (Permission::CoarseLocation, true),
            ]),
        });
        assert_eq!(effects, vec![Effect::QueryLocation]);
    }

    #[test]
    fn test_location_denial_ends_screen() {
        let mut controller = loaded_controller();
        let effects = controller.handle(grants(PermissionRequest::Location, false));
        assert_eq!(
            effects,
            vec![Effect::Dialog {
                message: Message::PermissionDenied(Permission::FineLocation),
                blocking: true,
            }]
        );

        assert_eq!(controller.handle(UiEvent::DialogDismissed), vec![Effect::Finish]);
        assert!(controller.is_finished());
        assert!(controller.handle(UiEvent::MapPressed).is_empty());
    }

    #[test]
    fn test_location_result_updates_coordinates() {
        let mut controller = loaded_controller();
        let here = Coordinates::new(15.6, 46.5);
        let effects = controller.handle(UiEvent::LocationResult(Some(here)));
        assert_eq!(controller.session().coordinates, here);
        assert_eq!(effects, vec![Effect::Toast(Message::LocationUpdated(here))]);
    }

    #[test]
    fn test_missing_location_is_fatal() {
        let mut controller = loaded_controller();
        let effects = controller.handle(UiEvent::LocationResult(None));
        assert_eq!(
            effects,
            vec![Effect::Dialog {
                message: Message::LocationUnavailable,
                blocking: true,
            }]
        );
        assert_eq!(controller.handle(UiEvent::DialogDismissed), vec![Effect::Finish]);
    }

    #[test]
    fn test_food_camera_scenario() {
        let mut controller = MainController::new();
        controller.handle(UiEvent::CategoryClicked(Category::Food));

        let effects = controller.handle(UiEvent::CameraPressed);
        assert_eq!(controller.state(), MainState::GettingCameraPermission);
        assert_eq!(
            effects,
            vec![Effect::RequestPermissions {
                request: PermissionRequest::Camera,
                permissions: vec![Permission::Camera],
            }]
        );

        let effects = controller.handle(grants(PermissionRequest::Camera, true));
        assert_eq!(
            effects,
            vec![Effect::OpenPhotoScreen(PhotoLaunch {
                source: CaptureSource::Camera,
                category: Category::Food,
                longitude: 0.0,
                latitude: 0.0,
            })]
        );
        assert_eq!(controller.session().pending_action, PendingAction::None);
    }

    #[test]
    fn test_camera_denial_is_informational() {
        let mut controller = loaded_controller();
        controller.handle(UiEvent::CategoryClicked(Category::Menu));
        controller.handle(UiEvent::CameraPressed);
        let effects = controller.handle(grants(PermissionRequest::Camera, false));
        assert_eq!(
            effects,
            vec![Effect::Dialog {
                message: Message::PermissionDenied(Permission::Camera),
                blocking: false,
            }]
        );
        assert!(controller.handle(UiEvent::DialogDismissed).is_empty());
        assert!(!controller.is_finished());
    }

    #[test]
    fn test_gallery_uses_gallery_source() {
        let mut controller = loaded_controller();
        controller.handle(UiEvent::CategoryClicked(Category::Restaurant));
        controller.handle(UiEvent::GalleryPressed);
        assert_eq!(controller.state(), MainState::GettingGalleryPermission);

        let effects = controller.handle(grants(PermissionRequest::Gallery, true));
        match effects.as_slice() {
            [Effect::OpenPhotoScreen(launch)] => {
                assert_eq!(launch.source, CaptureSource::Gallery);
                assert_eq!(launch.category, Category::Restaurant);
            }
            other => panic!("unexpected effects {:?}", other),
        }
    }

    #[test]
    fn test_body_sensors_grant_chains_camera_request() {
        let mut controller = loaded_controller();
        controller.handle(UiEvent::CategoryClicked(Category::Food));
        let effects = controller.handle(UiEvent::IntervalShooterPressed);
        assert_eq!(
            effects,
            vec![Effect::RequestPermissions {
                request: PermissionRequest::BodySensors,
                permissions: vec![Permission::BodySensors],
            }]
        );

        let effects = controller.handle(grants(PermissionRequest::BodySensors, true));
        assert_eq!(controller.state(), MainState::GettingCameraPermission);
        assert_eq!(
            effects,
            vec![Effect::RequestPermissions {
                request: PermissionRequest::Camera,
                permissions: vec![Permission::Camera],
            }]
        );

        let effects = controller.handle(grants(PermissionRequest::Camera, true));
        match effects.as_slice() {
            [Effect::OpenPhotoScreen(launch)] => {
                assert_eq!(launch.source, CaptureSource::IntervalShooter)
            }
            other => panic!("unexpected effects {:?}", other),
        }
    }

    #[test]
    fn test_body_sensors_denial_stays_on_screen() {
        let mut controller = loaded_controller();
        controller.handle(UiEvent::CategoryClicked(Category::Food));
        controller.handle(UiEvent::IntervalShooterPressed);
        let effects = controller.handle(grants(PermissionRequest::BodySensors, false));
        assert_eq!(controller.state(), MainState::GettingBodySensorsPermission);
        assert_eq!(
            effects,
            vec![Effect::Dialog {
                message: Message::PermissionDenied(Permission::BodySensors),
                blocking: false,
            }]
        );
    }

    #[test]
    fn test_map_opens_with_current_coordinates() {
        let mut controller = loaded_controller();
        let here = Coordinates::new(3.0, 4.0);
        controller.handle(UiEvent::LocationResult(Some(here)));
        let effects = controller.handle(UiEvent::MapPressed);
        assert_eq!(controller.state(), MainState::ChooseLocation);
        assert_eq!(effects, vec![Effect::OpenMapScreen(here)]);
    }

    #[test]
    fn test_map_confirmation_sets_exact_coordinates() {
        let mut controller = loaded_controller();
        controller.handle(UiEvent::MapPressed);
        let picked = Coordinates::new(10.0, 20.0);
        let effects = controller.handle(UiEvent::MapResult(MapResult::Confirmed(Some(MapData {
            coordinates: Some(picked),
        }))));
        assert_eq!(controller.session().coordinates, Coordinates::new(10.0, 20.0));
        assert_eq!(effects, vec![Effect::Toast(Message::MapLocationUpdated(picked))]);
    }

    #[test]
    fn test_map_cancellation_keeps_coordinates() {
        let mut controller = loaded_controller();
        let here = Coordinates::new(-1.25, 51.75);
        controller.handle(UiEvent::LocationResult(Some(here)));
        controller.handle(UiEvent::MapPressed);
        let effects = controller.handle(UiEvent::MapResult(MapResult::Cancelled));
        assert_eq!(controller.session().coordinates, here);
        assert_eq!(effects, vec![Effect::Toast(Message::DeviceLocationUsed)]);
    }

    #[test]
    fn test_incomplete_map_results_are_handled() {
        let mut controller = loaded_controller();
        controller.handle(UiEvent::MapPressed);

        let effects = controller.handle(UiEvent::MapResult(MapResult::Confirmed(Some(MapData {
            coordinates: None,
        }))));
        assert_eq!(
            effects,
            vec![Effect::Dialog {
                message: Message::MissingMapCoordinates,
                blocking: false,
            }]
        );

        let effects = controller.handle(UiEvent::MapResult(MapResult::Confirmed(None)));
        assert_eq!(
            effects,
            vec![Effect::Dialog {
                message: Message::MissingMapData,
                blocking: false,
            }]
        );
        assert_eq!(controller.session().coordinates, Coordinates::default());
        assert!(!controller.is_finished());
    }

    #[test]
    fn test_reset_requeries_location() {
        let mut controller = loaded_controller();
        let effects = controller.handle(UiEvent::ResetPressed);
        assert_eq!(controller.state(), MainState::ResetLocation);
        assert_eq!(effects, vec![Effect::QueryLocation]);
    }

    #[test]
    fn test_effect_failure_shows_dialog() {
        let mut controller = loaded_controller();
        let effects = controller.handle(UiEvent::EffectFailed("no map".to_string()));
        assert_eq!(
            effects,
            vec![Effect::Dialog {
                message: Message::DeviceError("no map".to_string()),
                blocking: false,
            }]
        );
    }
}
