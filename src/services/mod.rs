pub mod capabilities;
pub mod device;
pub mod driver;

pub use capabilities::{LocationProvider, PermissionBroker, Presenter, ScreenLauncher};
pub use device::DeviceServices;
pub use driver::MainScreenDriver;
