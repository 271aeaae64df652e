//! Viewport navigation state machine.
//!
//! The viewport is a single integer, the address shown on the first data
//! row. Every operation is a total function of `(top_address, length,
//! layout)`; none can fail, and each is a no-op when already at its
//! boundary. Invariants kept between operations:
//!
//! - `top_address` is a multiple of `bytes_per_line`
//! - `top_address` never underflows zero
//! - for files of at least one page, the last page never scrolls past
//!   the end; smaller files pin the viewport to zero

use crate::view::layout::HexLayout;

/// Scroll state for the hex view: the address of the first visible row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    top_address: usize,
}

impl Viewport {
    /// A viewport at the start of the buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Address of the first visible data row.
    pub fn top_address(&self) -> usize {
        self.top_address
    }

    /// Back to the start. Called on every file load.
    pub fn reset(&mut self) {
        self.top_address = 0;
    }

    /// Advance one line, unless the last page is already visible.
    pub fn line_down(&mut self, length: usize, layout: &HexLayout) {
        if self.top_address + layout.page_size() < length {
            self.top_address += layout.bytes_per_line();
        }
    }

    /// Retreat one line, unless already at the start.
    pub fn line_up(&mut self, _length: usize, layout: &HexLayout) {
        if self.top_address > 0 {
            self.top_address = self.top_address.saturating_sub(layout.bytes_per_line());
        }
    }

    /// Advance one page; near the end, snap to the last page.
    pub fn page_down(&mut self, length: usize, layout: &HexLayout) {
        let page = layout.page_size();
        if self.top_address + 2 * page < length {
            self.top_address += page;
        } else {
            self.top_address = end_target(length, layout);
        }
    }

    /// Retreat one page; near the start, snap to zero.
    pub fn page_up(&mut self, _length: usize, layout: &HexLayout) {
        let page = layout.page_size();
        if self.top_address >= page {
            self.top_address -= page;
        } else {
            self.top_address = 0;
        }
    }

    /// Jump to the first address.
    pub fn home(&mut self) {
        self.top_address = 0;
    }

    /// Jump to the last page.
    pub fn end(&mut self, length: usize, layout: &HexLayout) {
        self.top_address = end_target(length, layout);
    }
}

/// Top address of the last page: `length - page_size` floored to a line
/// boundary, clamped to zero for files smaller than one page.
fn end_target(length: usize, layout: &HexLayout) -> usize {
    let page = layout.page_size();
    if length > page {
        ((length - page) / layout.bytes_per_line()) * layout.bytes_per_line()
    } else {
        0
    }
}
