//! Named, colored address ranges used to highlight bytes in the renderer.

use thiserror::Error;

/// A bookmark covering the inclusive address range `[start, end]`.
///
/// Colors are 24-bit RGB packed as `0xRRGGBB`. The name is carried for
/// future UI use; the renderer only consumes the range and colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    /// Human-readable label.
    pub name: String,
    /// First covered address.
    pub start: usize,
    /// Last covered address (inclusive).
    pub end: usize,
    /// Foreground color, `0xRRGGBB`.
    pub fore_color: u32,
    /// Background color, `0xRRGGBB`.
    pub back_color: u32,
}

impl Bookmark {
    /// True when `addr` falls inside this bookmark's range.
    pub fn covers(&self, addr: usize) -> bool {
        addr >= self.start && addr <= self.end
    }
}

/// Rejection reasons for [`BookmarkTable::add`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookmarkError {
    /// `start > end`.
    #[error("Bookmark range is empty: start {start:#X} > end {end:#X}")]
    EmptyRange {
        /// Requested start address.
        start: usize,
        /// Requested end address.
        end: usize,
    },

    /// Range extends past the loaded buffer.
    #[error("Bookmark end {end:#X} is outside the buffer (length {length:#X})")]
    OutOfRange {
        /// Requested end address.
        end: usize,
        /// Current buffer length.
        length: usize,
    },
}

/// Ordered collection of bookmarks with first-match lookup.
///
/// Insertion order decides precedence for overlapping ranges: the earliest
/// added bookmark wins. Lookup is a linear scan; tables hold tens of
/// entries at most and the renderer dominates per-frame cost anyway.
#[derive(Debug, Clone, Default)]
pub struct BookmarkTable {
    bookmarks: Vec<Bookmark>,
}

impl BookmarkTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bookmark, validating against the current buffer length.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        start: usize,
        end: usize,
        fore_color: u32,
        back_color: u32,
        buffer_len: usize,
    ) -> Result<(), BookmarkError> {
        if start > end {
            return Err(BookmarkError::EmptyRange { start, end });
        }
        if end >= buffer_len {
            return Err(BookmarkError::OutOfRange {
                end,
                length: buffer_len,
            });
        }
        self.bookmarks.push(Bookmark {
            name: name.into(),
            start,
            end,
            fore_color,
            back_color,
        });
        Ok(())
    }

    /// Drop every bookmark. Called whenever a new file is loaded.
    pub fn clear(&mut self) {
        self.bookmarks.clear();
    }

    /// First bookmark (in insertion order) covering `addr`, if any.
    pub fn find(&self, addr: usize) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.covers(addr))
    }

    /// Number of bookmarks in the table.
    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    /// True when the table holds no bookmarks.
    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}
