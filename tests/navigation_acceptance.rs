//! Key-driven acceptance tests.
//!
//! Simulates the user pressing keys against `TuiApp<TestBackend>` and
//! asserts on the resulting state: the scroll scenarios from the design,
//! the help screen, quitting, and the file picker flow.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hexer::config::Settings;
use hexer::view::TuiApp;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::io::Write;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

/// App with a loaded file of `len` zero bytes, picker closed.
fn app_with_file(len: usize) -> (TuiApp<TestBackend>, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.bin");
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(&vec![0u8; len]).unwrap();

    let terminal = Terminal::new(TestBackend::new(80, 38)).unwrap();
    let settings = Settings {
        initial_dir: Some(dir.path().to_path_buf()),
    };
    let mut app = TuiApp::with_terminal(terminal, &settings);
    app.state_mut().picker = None;
    app.state_mut().load_file(&path).unwrap();
    (app, dir)
}

/// App with the startup picker still open on an empty directory.
fn app_at_startup() -> (TuiApp<TestBackend>, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let terminal = Terminal::new(TestBackend::new(80, 38)).unwrap();
    let settings = Settings {
        initial_dir: Some(dir.path().to_path_buf()),
    };
    let app = TuiApp::with_terminal(terminal, &settings);
    (app, dir)
}

#[test]
fn line_scroll_near_end_of_file() {
    // 1024 bytes, page 512: End lands on 512, Down is a no-op, Up backs
    // off one line.
    let (mut app, _dir) = app_with_file(1024);

    app.handle_key(key(KeyCode::End));
    assert_eq!(app.state().viewport.top_address(), 512);

    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.state().viewport.top_address(), 512);

    app.handle_key(key(KeyCode::Up));
    assert_eq!(app.state().viewport.top_address(), 496);
}

#[test]
fn page_down_past_end_snaps_to_aligned_last_page() {
    let (mut app, _dir) = app_with_file(1000);

    app.handle_key(key(KeyCode::PageDown));
    assert_eq!(app.state().viewport.top_address(), 480);
}

#[test]
fn end_on_undersized_file_clamps_to_zero() {
    let (mut app, _dir) = app_with_file(300);

    app.handle_key(key(KeyCode::End));
    assert_eq!(app.state().viewport.top_address(), 0);
}

#[test]
fn home_returns_from_anywhere() {
    let (mut app, _dir) = app_with_file(4096);

    app.handle_key(key(KeyCode::PageDown));
    app.handle_key(key(KeyCode::PageDown));
    assert_ne!(app.state().viewport.top_address(), 0);

    app.handle_key(key(KeyCode::Home));
    assert_eq!(app.state().viewport.top_address(), 0);
}

#[test]
fn unmapped_keys_are_ignored() {
    let (mut app, _dir) = app_with_file(1024);
    app.handle_key(key(KeyCode::PageDown));
    let top = app.state().viewport.top_address();

    app.handle_key(key(KeyCode::Char('x')));
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Left));

    assert_eq!(app.state().viewport.top_address(), top);
    assert!(!app.state().should_quit);
}

#[test]
fn f1_shows_help_and_any_key_dismisses_it() {
    let (mut app, _dir) = app_with_file(1024);

    app.handle_key(key(KeyCode::F(1)));
    assert!(app.state().help_visible);

    // The dismissing key is consumed, not dispatched.
    app.handle_key(key(KeyCode::PageDown));
    assert!(!app.state().help_visible);
    assert_eq!(app.state().viewport.top_address(), 0);
}

#[test]
fn help_screen_renders_bindings() {
    let (mut app, _dir) = app_with_file(1024);
    app.handle_key(key(KeyCode::F(1)));
    app.draw().unwrap();

    let buffer = app.terminal().backend().buffer();
    let mut text = String::new();
    for y in 0..38 {
        for x in 0..80 {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    assert!(text.contains("CTRL+O"));
    assert!(text.contains("Scroll to last address"));
    assert!(text.contains("Press any key to return"));
}

#[test]
fn ctrl_q_and_ctrl_c_quit() {
    let (mut app, _dir) = app_with_file(16);
    app.handle_key(ctrl('q'));
    assert!(app.state().should_quit);

    let (mut app, _dir) = app_with_file(16);
    app.handle_key(ctrl('c'));
    assert!(app.state().should_quit);
}

#[test]
fn cancelling_startup_picker_exits() {
    let (mut app, _dir) = app_at_startup();
    assert!(app.state().picker.is_some());

    app.handle_key(key(KeyCode::Esc));
    assert!(app.state().picker.is_none());
    assert!(app.state().should_quit);
}

#[test]
fn cancelling_reopened_picker_keeps_loaded_file() {
    let (mut app, _dir) = app_with_file(256);
    app.handle_key(key(KeyCode::PageDown)); // no-op scroll, just state noise
    let top = app.state().viewport.top_address();

    app.handle_key(ctrl('o'));
    assert!(app.state().picker.is_some());

    app.handle_key(key(KeyCode::Esc));
    assert!(app.state().picker.is_none());
    assert!(!app.state().should_quit);
    assert!(app.state().has_file());
    assert_eq!(app.state().viewport.top_address(), top);
}

#[test]
fn picking_a_file_loads_it_and_resets_state() {
    let (mut app, dir) = app_at_startup();
    std::fs::write(dir.path().join("pick.bin"), vec![0x42u8; 2048]).unwrap();

    // Rebuild the listing now that the directory has content.
    app.state_mut().open_picker();

    // Entries: "..", then "pick.bin".
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Enter));

    assert!(app.state().picker.is_none());
    assert!(app.state().has_file());
    assert_eq!(app.state().file_name(), Some("pick.bin"));
    assert_eq!(app.state().buffer().unwrap().len(), 2048);
    assert_eq!(app.state().viewport.top_address(), 0);
    assert!(!app.state().should_quit);
}

#[test]
fn opening_a_new_file_clears_bookmarks_and_scroll() {
    let (mut app, dir) = app_with_file(4096);
    app.state_mut()
        .add_bookmark("mark", 0, 15, 0xFF0000, 0)
        .unwrap();
    app.handle_key(key(KeyCode::End));
    assert_ne!(app.state().viewport.top_address(), 0);

    std::fs::write(dir.path().join("next.bin"), vec![1u8; 64]).unwrap();
    app.handle_key(ctrl('o'));
    // Entries: "..", "data.bin", "next.bin".
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Enter));

    assert_eq!(app.state().file_name(), Some("next.bin"));
    assert_eq!(app.state().viewport.top_address(), 0);
    assert!(app.state().bookmarks.is_empty());
}

#[test]
fn picker_descends_into_directories() {
    let (mut app, dir) = app_at_startup();
    std::fs::create_dir(dir.path().join("inner")).unwrap();
    std::fs::write(dir.path().join("inner").join("deep.bin"), [9u8; 8]).unwrap();
    app.state_mut().open_picker();

    // Entries: "..", "inner". Descend.
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Enter));
    {
        let picker = app.state().picker.as_ref().unwrap();
        assert_eq!(picker.dir(), dir.path().join("inner"));
    }

    // Entries now: "..", "deep.bin".
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.state().file_name(), Some("deep.bin"));
}

#[test]
fn alt_enter_is_accepted_and_harmless() {
    let (mut app, _dir) = app_with_file(1024);
    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT));
    assert!(!app.state().should_quit);
    assert_eq!(app.state().viewport.top_address(), 0);
}
