//! File picker modal rendering.

use crate::state::FilePicker;
use crate::view::palette::Palette;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, StatefulWidget};
use ratatui::Frame;

const MODAL_WIDTH: u16 = 60;

/// Render the picker as a centered modal over the current frame.
pub fn render_picker(frame: &mut Frame, picker: &FilePicker, palette: &Palette) {
    let area = frame.area();
    let modal_area = centered_rect(MODAL_WIDTH, picker.entries().len(), area);

    frame.render_widget(Clear, modal_area);

    let items: Vec<ListItem> = picker
        .entries()
        .iter()
        .map(|entry| {
            let marker = if entry.is_dir { "/" } else { " " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, palette.addr_style()),
                Span::styled(entry.label.clone(), palette.text_style()),
            ]))
        })
        .collect();

    let title = format!(" Select file - {} ", picker.dir().display());
    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .title_bottom(Line::from(" Enter: open   Esc: cancel ").centered())
                .borders(Borders::ALL)
                .style(palette.text_style()),
        )
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::REVERSED)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default().with_selected(Some(picker.selected()));
    StatefulWidget::render(list, modal_area, frame.buffer_mut(), &mut list_state);
}

/// Centered rect sized to the entry count, clamped to the screen.
fn centered_rect(width: u16, entry_count: usize, area: Rect) -> Rect {
    let width = width.min(area.width);
    // Two border rows around the list
    let height = ((entry_count as u16).saturating_add(2))
        .clamp(3, area.height.saturating_sub(2).max(3));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect { x, y, width, height }
}
