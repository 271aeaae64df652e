//! Startup configuration: settings file and key bindings.

pub mod keybindings;
pub mod settings;

pub use keybindings::KeyBindings;
pub use settings::Settings;
