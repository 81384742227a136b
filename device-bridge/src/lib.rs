//! # Device Bridge
//!
//! Platform access for the Eatical main screen: runtime permissions, the last
//! known device location, and launching the photo and map screens.
//!
//! On Android every call goes through JNI to helper methods on the host
//! activity. Requests are fire-and-forget on the Java side; results are
//! written into static slots which this crate polls on the async runtime
//! until a value (or an error) appears. Only the location lookup is bounded
//! by [`BridgeConfig::result_timeout`]; permission dialogs and the map screen
//! wait for the user however long that takes.
//!
//! ## Host activity contract
//!
//! The activity class named in [`BridgeConfig::main_activity_class`] must
//! expose:
//!
//! - `getInstance()` (static, `@JvmStatic`) returning the live activity
//! - `clearLastError()` / `getLastError(): String?` (static)
//! - `clearResults()` (static), setting every result slot below to `null`;
//!   called together with `clearLastError()` before each request
//! - `requestAppPermissions(names: String)` with newline separated names,
//!   answered through `getPermissionResults(): String?` as a JSON object
//!   `{ "<permission>": bool }`
//! - `checkAppPermission(name: String): Boolean`
//! - `requestLastLocation()`, answered through `getLastLocation(): String?`
//!   as JSON (`null` when the device has no fix)
//! - `launchPhotoScreen(extras: String)` with the launch parameters as JSON
//! - `launchMapScreen(extras: String)`, answered through
//!   `getMapResult(): String?` as JSON `{ "confirmed": bool, "data": ... }`
//!
//! The `get*` result getters are plain reads and do not consume the slot;
//! a value stays until the next `clearResults()`.
//!
//! On other platforms there is no runtime permission model, so every
//! permission is reported as granted; location and screen launches fail
//! with [`BridgeError::PlatformNotSupported`].

pub mod config;
pub mod error;
pub mod location;
pub mod models;
pub mod permissions;
pub mod screens;

mod poll;

#[cfg(target_os = "android")]
mod activity;

pub use config::BridgeConfig;
pub use error::BridgeError;
pub use location::last_known_location;
pub use models::{GeoPoint, MapScreenData, MapScreenResult};
pub use permissions::{is_permission_granted, request_permissions};
pub use screens::{finish_activity, open_map_screen, open_photo_screen};
