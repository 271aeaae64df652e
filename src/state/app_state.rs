//! Application state and transitions.
//!
//! `AppState` is the single state value threaded through the main loop:
//! the loaded buffer, the bookmark table, the viewport, and the modal
//! flags. No mutable globals; every transition is a method here or on the
//! contained state machines.

use crate::model::{BookmarkError, BookmarkTable, ByteBuffer, InputError, KeyAction};
use crate::state::{FilePicker, Viewport};
use crate::view::layout::HexLayout;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Root application state. Pure data; rendering reads it, key dispatch
/// mutates it.
#[derive(Debug)]
pub struct AppState {
    /// Currently loaded file, if any. Replaced atomically on open.
    buffer: Option<ByteBuffer>,
    /// Display name of the loaded file.
    file_name: Option<String>,
    /// Bookmark table; cleared on every load.
    pub bookmarks: BookmarkTable,
    /// Scroll state.
    pub viewport: Viewport,
    /// Grid geometry.
    pub layout: HexLayout,
    /// Directory offered by the picker; follows the last opened file.
    pub current_folder: PathBuf,
    /// Whether the help screen is showing.
    pub help_visible: bool,
    /// File picker modal, when open.
    pub picker: Option<FilePicker>,
    /// Set when the user asked to quit.
    pub should_quit: bool,
}

impl AppState {
    /// Fresh state with no file loaded, picking from `start_dir`.
    pub fn new(start_dir: PathBuf) -> Self {
        Self {
            buffer: None,
            file_name: None,
            bookmarks: BookmarkTable::new(),
            viewport: Viewport::new(),
            layout: HexLayout::default(),
            current_folder: start_dir,
            help_visible: false,
            picker: None,
            should_quit: false,
        }
    }

    /// The loaded buffer, if any.
    pub fn buffer(&self) -> Option<&ByteBuffer> {
        self.buffer.as_ref()
    }

    /// Display name of the loaded file, if any.
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// True once a file is loaded.
    pub fn has_file(&self) -> bool {
        self.buffer.is_some()
    }

    /// Load `path`, replacing the buffer, resetting the viewport, and
    /// clearing bookmarks. On failure the previous state is untouched.
    pub fn load_file(&mut self, path: &Path) -> Result<(), InputError> {
        let buffer = ByteBuffer::load(path)?;
        info!("Loaded {} ({} bytes)", path.display(), buffer.len());

        self.buffer = Some(buffer);
        self.file_name = Some(
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        );
        self.viewport.reset();
        self.bookmarks.clear();
        if let Some(parent) = path.parent() {
            self.current_folder = parent.to_path_buf();
        }
        Ok(())
    }

    /// Add a bookmark against the current buffer bounds.
    pub fn add_bookmark(
        &mut self,
        name: impl Into<String>,
        start: usize,
        end: usize,
        fore_color: u32,
        back_color: u32,
    ) -> Result<(), BookmarkError> {
        let length = self.buffer.as_ref().map_or(0, ByteBuffer::len);
        self.bookmarks
            .add(name, start, end, fore_color, back_color, length)
    }

    /// Open the file picker on the current folder.
    pub fn open_picker(&mut self) {
        self.picker = Some(FilePicker::open(self.current_folder.clone()));
    }

    /// Apply a domain action. Scroll actions need a loaded file and are
    /// ignored otherwise; modal routing happens before this is called.
    pub fn apply(&mut self, action: KeyAction) {
        let length = match &self.buffer {
            Some(buffer) => buffer.len(),
            None => {
                // Only application-level actions make sense without a file.
                match action {
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::OpenFile => self.open_picker(),
                    KeyAction::ShowHelp => self.help_visible = true,
                    _ => {}
                }
                return;
            }
        };

        match action {
            KeyAction::LineDown => self.viewport.line_down(length, &self.layout),
            KeyAction::LineUp => self.viewport.line_up(length, &self.layout),
            KeyAction::PageDown => self.viewport.page_down(length, &self.layout),
            KeyAction::PageUp => self.viewport.page_up(length, &self.layout),
            KeyAction::JumpToStart => self.viewport.home(),
            KeyAction::JumpToEnd => self.viewport.end(length, &self.layout),
            KeyAction::ShowHelp => self.help_visible = true,
            KeyAction::OpenFile => self.open_picker(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::ToggleFullscreen => {
                // Terminal backends have no window to toggle.
                debug!("Fullscreen toggle requested; not applicable in a terminal");
            }
            KeyAction::Cancel => {}
        }
    }
}
