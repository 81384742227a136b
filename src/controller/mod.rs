pub mod events;
pub mod session;
pub mod state_machine;

pub use events::{Effect, Message, UiEvent};
pub use session::SessionState;
pub use state_machine::{MainController, ScreenView};
