/// States of the main screen
///
/// Every state except `Initial` and `Loading` stands for one side effect that
/// runs when the state is entered. The machine stays in that state until the
/// next event arrives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MainState {
    #[default]
    Initial,
    /// Splash screen is kept while in this state
    Loading,
    GettingLocationPermission,
    GettingCameraPermission,
    GettingGalleryPermission,
    GettingBodySensorsPermission,
    ChooseLocation,
    ResetLocation,
}
