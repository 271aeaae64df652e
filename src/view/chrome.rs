//! Title and status bars around the hex view.

use crate::view::layout;
use crate::view::palette::Palette;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// Title bar: file name on the left, last valid address on the right.
///
/// Names longer than the available width are abbreviated with `...`.
pub fn render_title_bar(buf: &mut Buffer, area: Rect, file_name: &str, length: usize, palette: &Palette) {
    if area.height == 0 {
        return;
    }
    let y = area.y;
    let cols = area.width;

    let max_name_len = cols.saturating_sub(12) as usize;
    let name = if file_name.chars().count() <= max_name_len {
        file_name.to_string()
    } else {
        let keep = max_name_len.saturating_sub(6).max(1);
        let head: String = file_name.chars().take(keep).collect();
        format!("{head}...")
    };
    buf.set_string(area.x + 1, y, name, palette.text_style());

    let range = format!("0x{:08X}", length.saturating_sub(1));
    let x = area.x + cols.saturating_sub(range.len() as u16 + 3);
    buf.set_string(x, y, range, palette.text_style());
}

/// Bottom bar with the key hints.
pub fn render_status_bar(buf: &mut Buffer, area: Rect, palette: &Palette) {
    let y = area.y + layout::STATUS_ROW;
    if y >= area.bottom() {
        return;
    }
    buf.set_string(
        area.x + 1,
        y,
        "F1 Help   CTRL+O Open file   CTRL+Q Quit",
        palette.text_style(),
    );
}
