//! Full-screen help listing the key bindings.
//!
//! Shown on F1; any key returns to the viewer.

use crate::view::palette::Palette;
use ratatui::layout::Alignment;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const COMMANDS: &[(&str, &str)] = &[
    ("F1", "Help"),
    ("CTRL+Q", "Quit"),
    ("CTRL+O", "Open file"),
    ("ESC", "Cancel"),
    ("DOWN", "Scroll down"),
    ("UP", "Scroll up"),
    ("PGDOWN", "Scroll to next page"),
    ("PGUP", "Scroll to previous page"),
    ("HOME", "Scroll to first address"),
    ("END", "Scroll to last address"),
    ("ALT+ENTER", "Toggle fullscreen"),
];

/// Render the help screen over the whole frame.
pub fn render_help(frame: &mut Frame, palette: &Palette, program_title: &str) {
    let key_style = palette.addr_style();
    let text_style = palette.text_style();

    let mut lines = vec![
        Line::from(Span::styled(format!("Help - {program_title}"), text_style)),
        Line::default(),
        Line::default(),
    ];
    for (key, command) in COMMANDS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<10}"), key_style),
            Span::styled(*command, text_style),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "  Press any key to return...",
        key_style,
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left);
    frame.render_widget(paragraph, frame.area());
}
