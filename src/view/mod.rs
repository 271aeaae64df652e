//! TUI rendering and terminal management (impure shell).
//!
//! Owns the terminal, the event loop, and the routing of key events into
//! state transitions. Everything below this module is pure: rendering
//! reads `AppState`, key handling mutates it.

pub mod chrome;
pub mod help;
pub mod hex_view;
pub mod layout;
pub mod palette;
pub mod picker;

pub use hex_view::HexView;
pub use palette::Palette;

use crate::config::{KeyBindings, Settings};
use crate::state::{AppState, PickerAction};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, widgets::Block, Frame, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Program name shown in the window title and help screen.
pub const PROGRAM_NAME: &str = "Hexer";

/// Window title: program name plus version.
pub fn program_title() -> String {
    format!("{PROGRAM_NAME} v{}", env!("CARGO_PKG_VERSION"))
}

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// I/O error during terminal operations.
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application.
///
/// Generic over the backend so the tests drive it with `TestBackend`.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: AppState,
    key_bindings: KeyBindings,
    palette: Palette,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Event loop: block on the first event, drain the rest of the queue,
    /// then render one frame. Returns when the user quits or when the
    /// startup picker is cancelled with no file ever loaded.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        while !self.state.should_quit {
            self.handle_event(event::read()?);
            while event::poll(Duration::ZERO)? {
                self.handle_event(event::read()?);
            }
            if self.state.should_quit {
                break;
            }
            self.draw()?;
        }
        Ok(())
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the application around an existing terminal, with the file
    /// picker already open on the settings directory.
    pub fn with_terminal(terminal: Terminal<B>, settings: &Settings) -> Self {
        let mut state = AppState::new(settings.picker_start_dir());
        state.open_picker();
        Self {
            terminal,
            state,
            key_bindings: KeyBindings::default(),
            palette: Palette::default(),
        }
    }

    /// Render one frame.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.state;
        let palette = &self.palette;
        self.terminal.draw(|frame| render(frame, state, palette))?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            // The layout is fixed; the next draw repaints everything.
            Event::Resize(_, _) => {}
            _ => {}
        }
    }

    /// Handle a single keyboard event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Ctrl+C always quits, bindings or not.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.should_quit = true;
            return;
        }

        // The help screen waits for any key.
        if self.state.help_visible {
            self.state.help_visible = false;
            return;
        }

        if self.state.picker.is_some() {
            self.handle_picker_key(key);
            return;
        }

        if let Some(action) = self.key_bindings.get(key) {
            self.state.apply(action);
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) {
        let Some(picker) = self.state.picker.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Up => picker.select_prev(),
            KeyCode::Down => picker.select_next(),
            KeyCode::Home => picker.select_first(),
            KeyCode::End => picker.select_last(),
            KeyCode::Enter => {
                if let Some(PickerAction::Selected(path)) = picker.activate() {
                    self.state.picker = None;
                    if let Err(err) = self.state.load_file(&path) {
                        warn!("Open failed: {err}");
                    }
                    if !self.state.has_file() {
                        // Nothing was ever loaded: the viewer has nothing
                        // to show, exit cleanly.
                        self.state.should_quit = true;
                    }
                }
            }
            KeyCode::Esc => {
                self.state.picker = None;
                if !self.state.has_file() {
                    self.state.should_quit = true;
                }
            }
            _ => {}
        }
    }

    /// Read access to the application state, for assertions.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Mutable access to the application state, for test setup.
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// The underlying terminal, for buffer inspection in tests.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Paint one frame from the application state.
///
/// Pure with respect to the state: same state, same cells.
pub fn render(frame: &mut Frame, state: &AppState, palette: &Palette) {
    let area = frame.area();

    // Background in the default colors.
    frame.render_widget(Block::default().style(palette.text_style()), area);

    if state.help_visible {
        help::render_help(frame, palette, &program_title());
        return;
    }

    if let Some(buffer) = state.buffer() {
        chrome::render_title_bar(
            frame.buffer_mut(),
            area,
            state.file_name().unwrap_or(""),
            buffer.len(),
            palette,
        );
        frame.render_widget(
            HexView {
                buffer,
                bookmarks: &state.bookmarks,
                viewport: &state.viewport,
                layout: &state.layout,
                palette,
            },
            area,
        );
        chrome::render_status_bar(frame.buffer_mut(), area, palette);
    }

    if let Some(picker) = &state.picker {
        picker::render_picker(frame, picker, palette);
    }
}

/// Set up the terminal, run the application, and restore the terminal on
/// every exit path.
pub fn run(settings: Settings) -> Result<(), TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(SetTitle(program_title()))?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    let mut app = TuiApp::with_terminal(terminal, &settings);

    let result = app.run();

    restore_terminal();
    result
}

fn restore_terminal() {
    // Best effort; failing to restore must not mask the run result.
    let _ = disable_raw_mode();
    let _ = io::stdout().execute(LeaveAlternateScreen);
}
