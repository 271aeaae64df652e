//! Color palette for the viewer panes.
//!
//! Colors are 24-bit RGB integers (`0xRRGGBB`) translated to ratatui
//! styles at the edge. The defaults reproduce the classic dark scheme:
//! dim address gutter, bright hex bytes, dim character pane.

use crate::model::Bookmark;
use ratatui::style::{Color, Style};

/// Fixed per-pane foreground/background colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Default text foreground (title bar, help, picker).
    pub default_fore: u32,
    /// Default background for every pane.
    pub default_back: u32,
    /// Address gutter foreground.
    pub addr_fore: u32,
    /// Address gutter background.
    pub addr_back: u32,
    /// Hex pane foreground.
    pub bytes_fore: u32,
    /// Hex pane background.
    pub bytes_back: u32,
    /// Character pane foreground.
    pub chars_fore: u32,
    /// Character pane background.
    pub chars_back: u32,
}

impl Default for Palette {
    fn default() -> Self {
        const BACK: u32 = 0x101010;
        Self {
            default_fore: 0xE0E0E0,
            default_back: BACK,
            addr_fore: 0x808080,
            addr_back: BACK,
            bytes_fore: 0xF0F0F0,
            bytes_back: BACK,
            chars_fore: 0x808080,
            chars_back: BACK,
        }
    }
}

impl Palette {
    /// Style for ordinary UI text.
    pub fn text_style(&self) -> Style {
        style(self.default_fore, self.default_back)
    }

    /// Style for the address gutter and the offsets header.
    pub fn addr_style(&self) -> Style {
        style(self.addr_fore, self.addr_back)
    }

    /// Style for hex pane cells without a bookmark.
    pub fn bytes_style(&self) -> Style {
        style(self.bytes_fore, self.bytes_back)
    }

    /// Style for character pane cells without a bookmark.
    pub fn chars_style(&self) -> Style {
        style(self.chars_fore, self.chars_back)
    }

    /// Style carrying a bookmark's colors. Applied to both the hex cell
    /// and the character cell of a covered address.
    pub fn bookmark_style(&self, bookmark: &Bookmark) -> Style {
        style(bookmark.fore_color, bookmark.back_color)
    }
}

/// Build a ratatui style from packed RGB fore/back colors.
pub fn style(fore: u32, back: u32) -> Style {
    Style::default().fg(rgb(fore)).bg(rgb(back))
}

/// Unpack `0xRRGGBB` into a ratatui color.
pub fn rgb(color: u32) -> Color {
    Color::Rgb(
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    )
}
