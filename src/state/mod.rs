//! Application state: the viewport state machine, the file picker modal,
//! and the root state value tying them together.

pub mod app_state;
pub mod picker;
pub mod viewport;

pub use app_state::AppState;
pub use picker::{FilePicker, PickerAction, PickerEntry};
pub use viewport::Viewport;
