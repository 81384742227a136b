pub mod capture;
pub mod category;
pub mod coordinates;
pub mod main_state;
pub mod map_result;
pub mod permission;

pub use capture::{CaptureSource, PendingAction, PhotoLaunch};
pub use category::Category;
pub use coordinates::Coordinates;
pub use main_state::MainState;
pub use map_result::{MapData, MapResult};
pub use permission::{Permission, PermissionGrants, PermissionRequest};
