//! Domain-level keyboard actions independent of key bindings.

/// Actions a key press can request.
///
/// These represent user intent, not specific keys; the mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` lives in
/// [`crate::config::KeyBindings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Scroll the view down by one line. Default: ↓
    LineDown,
    /// Scroll the view up by one line. Default: ↑
    LineUp,
    /// Scroll down by one page. Default: Page Down
    PageDown,
    /// Scroll up by one page. Default: Page Up
    PageUp,
    /// Jump to the first address. Default: Home
    JumpToStart,
    /// Jump to the last page. Default: End
    JumpToEnd,

    /// Show the help screen. Default: F1
    ShowHelp,
    /// Open the file picker. Default: Ctrl+O
    OpenFile,
    /// Toggle fullscreen. Default: Alt+Enter. No-op on terminal backends.
    ToggleFullscreen,
    /// Dismiss the active modal. Default: Esc
    Cancel,
    /// Exit the application. Default: Ctrl+Q
    Quit,
}
