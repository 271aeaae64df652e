//! The hex+ASCII dump widget.
//!
//! Paints one screenful: the offsets header, the address gutter, the hex
//! pane, and the character pane. Rendering is a pure function of
//! `(buffer, bookmarks, viewport, layout, palette)`; the same inputs
//! always produce the same cells, which is what the grid tests rely on.
//!
//! Bookmark colors apply to both the hex cell and the character cell of a
//! covered address. Bytes outside printable ASCII (`0x20..=0x7E`) render
//! as `·` in the character pane.

use crate::model::{BookmarkTable, ByteBuffer};
use crate::state::Viewport;
use crate::view::layout::{self, HexLayout};
use crate::view::palette::Palette;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

/// Substitute glyph for non-printable bytes.
pub const SUBSTITUTE_GLYPH: char = '·';

/// Character-pane glyph for a byte.
pub fn glyph(byte: u8) -> char {
    if (0x20..=0x7E).contains(&byte) {
        byte as char
    } else {
        SUBSTITUTE_GLYPH
    }
}

/// One frame of the hex view. Borrows everything; construct per draw.
pub struct HexView<'a> {
    /// Loaded file bytes.
    pub buffer: &'a ByteBuffer,
    /// Bookmark overlay.
    pub bookmarks: &'a BookmarkTable,
    /// Scroll state.
    pub viewport: &'a Viewport,
    /// Grid geometry.
    pub layout: &'a HexLayout,
    /// Pane colors.
    pub palette: &'a Palette,
}

impl Widget for HexView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let length = self.buffer.len();
        let bytes_per_line = self.layout.bytes_per_line();
        let hex_col = area.x + layout::HEX_PANE_COL;
        let char_col = area.x + self.layout.char_pane_col();

        // Offsets header
        let header_y = area.y + layout::HEADER_ROW;
        if header_y < area.bottom() {
            buf.set_string(
                hex_col,
                header_y,
                self.layout.header_text(),
                self.palette.addr_style(),
            );
        }

        for row in 0..self.layout.max_lines() {
            let row_addr = self.viewport.top_address() + row * bytes_per_line;
            if row_addr >= length {
                break;
            }
            let y = area.y + layout::FIRST_DATA_ROW + row as u16;
            if y >= area.bottom() {
                break;
            }

            buf.set_string(
                area.x + layout::GUTTER_COL,
                y,
                format!("{row_addr:08X} "),
                self.palette.addr_style(),
            );

            for offset in 0..bytes_per_line {
                let addr = row_addr + offset;
                let x = hex_col + (offset as u16) * 3;
                match self.buffer.get(addr) {
                    Some(byte) => {
                        let style = match self.bookmarks.find(addr) {
                            Some(bookmark) => self.palette.bookmark_style(bookmark),
                            None => self.palette.bytes_style(),
                        };
                        buf.set_string(x, y, format!("{byte:02X} "), style);
                    }
                    None => {
                        buf.set_string(x, y, "   ", self.palette.bytes_style());
                    }
                }
            }

            for offset in 0..bytes_per_line {
                let addr = row_addr + offset;
                let x = char_col + offset as u16;
                match self.buffer.get(addr) {
                    Some(byte) => {
                        let style = match self.bookmarks.find(addr) {
                            Some(bookmark) => self.palette.bookmark_style(bookmark),
                            None => self.palette.chars_style(),
                        };
                        buf.set_string(x, y, glyph(byte).to_string(), style);
                    }
                    None => {
                        buf.set_string(x, y, " ", self.palette.chars_style());
                    }
                }
            }
        }
    }
}
