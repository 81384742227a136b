// Seams between the main screen and the platform. The driver only sees these
// traits, so tests run against in-memory fakes.
#![allow(async_fn_in_trait)]

use crate::controller::{Message, ScreenView};
use crate::error::AppError;
use crate::models::{Coordinates, MapResult, Permission, PermissionGrants, PhotoLaunch};

pub trait PermissionBroker {
    /// Prompts for `permissions` and resolves with one answer per permission
    async fn request_permissions(
        &self,
        permissions: &[Permission],
    ) -> Result<PermissionGrants, AppError>;

    /// Current grant state, without prompting
    async fn is_granted(&self, permission: Permission) -> Result<bool, AppError>;
}

pub trait LocationProvider {
    async fn last_known_location(&self) -> Result<Option<Coordinates>, AppError>;
}

pub trait ScreenLauncher {
    async fn open_photo_screen(&self, launch: &PhotoLaunch) -> Result<(), AppError>;

    /// Resolves when the map screen closes
    async fn open_map_screen(&self, at: Coordinates) -> Result<MapResult, AppError>;

    fn finish_screen(&self) -> Result<(), AppError>;
}

/// Where toasts, dialogs and the rendered state end up
pub trait Presenter {
    fn render(&mut self, view: &ScreenView);
    fn toast(&mut self, message: Message);
    fn dialog(&mut self, message: Message, blocking: bool);
}
