//! Grid geometry for the hex view.
//!
//! Centralized location for the layout numbers so the renderer, the
//! viewport math, and the tests all agree on one description of the grid.

use thiserror::Error;

/// Column of the address gutter.
pub const GUTTER_COL: u16 = 4;

/// Column where the hex pane (and the offsets header) starts.
/// The gutter prints 8 hex digits plus a space, so the panes abut.
pub const HEX_PANE_COL: u16 = 13;

/// Row of the offsets header line.
pub const HEADER_ROW: u16 = 3;

/// Row of the first data line.
pub const FIRST_DATA_ROW: u16 = 4;

/// Row of the bottom hint bar.
pub const STATUS_ROW: u16 = 36;

/// Minimum text grid the application is designed for.
pub const MIN_GRID_COLS: u16 = 80;
/// Minimum number of grid rows.
pub const MIN_GRID_ROWS: u16 = 38;

/// Invalid layout parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// `bytes_per_line` must be positive.
    #[error("bytes_per_line must be positive")]
    ZeroBytesPerLine,
    /// `max_lines` must be positive.
    #[error("max_lines must be positive")]
    ZeroMaxLines,
}

/// Immutable grid geometry: how many bytes per line, how many lines per
/// page, and where each pane starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexLayout {
    bytes_per_line: usize,
    max_lines: usize,
    grid_cols: u16,
    grid_rows: u16,
}

impl HexLayout {
    /// Build a layout, validating that both dimensions are positive.
    pub fn new(bytes_per_line: usize, max_lines: usize) -> Result<Self, LayoutError> {
        if bytes_per_line == 0 {
            return Err(LayoutError::ZeroBytesPerLine);
        }
        if max_lines == 0 {
            return Err(LayoutError::ZeroMaxLines);
        }
        Ok(Self {
            bytes_per_line,
            max_lines,
            grid_cols: MIN_GRID_COLS,
            grid_rows: MIN_GRID_ROWS,
        })
    }

    /// Bytes shown on one data line.
    pub fn bytes_per_line(&self) -> usize {
        self.bytes_per_line
    }

    /// Data lines shown on one screen.
    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Bytes covered by one screenful.
    pub fn page_size(&self) -> usize {
        self.max_lines * self.bytes_per_line
    }

    /// Grid width in cells.
    pub fn grid_cols(&self) -> u16 {
        self.grid_cols
    }

    /// Grid height in cells.
    pub fn grid_rows(&self) -> u16 {
        self.grid_rows
    }

    /// Column where the character pane starts: after `bytes_per_line`
    /// three-cell hex groups.
    pub fn char_pane_col(&self) -> u16 {
        HEX_PANE_COL + (self.bytes_per_line as u16) * 3
    }

    /// The offsets header text: `"00 01 ... "` up to `bytes_per_line - 1`.
    pub fn header_text(&self) -> String {
        let mut header = String::with_capacity(self.bytes_per_line * 3);
        for offset in 0..self.bytes_per_line {
            if offset > 0 {
                header.push(' ');
            }
            header.push_str(&format!("{offset:02X}"));
        }
        header
    }
}

impl Default for HexLayout {
    /// The stock 16x32 layout: one page is 512 bytes.
    fn default() -> Self {
        Self {
            bytes_per_line: 16,
            max_lines: 32,
            grid_cols: MIN_GRID_COLS,
            grid_rows: MIN_GRID_ROWS,
        }
    }
}
