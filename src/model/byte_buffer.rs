//! The loaded file as an immutable byte sequence.

use crate::model::InputError;
use std::path::Path;

/// An immutable in-memory copy of the currently loaded file.
///
/// The buffer never changes while loaded; opening another file replaces
/// the whole value. Addresses are 0-based offsets into the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteBuffer {
    bytes: Vec<u8>,
}

impl ByteBuffer {
    /// Read the whole file at `path` into memory.
    pub fn load(path: &Path) -> Result<Self, InputError> {
        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let bytes = std::fs::read(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { bytes })
    }

    /// Construct from raw bytes. Used by tests and programmatic callers.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Number of bytes in the buffer.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Bounds-checked byte access.
    pub fn get(&self, addr: usize) -> Option<u8> {
        self.bytes.get(addr).copied()
    }

    /// Byte at `addr`. Panics when out of bounds; callers clamp first.
    pub fn byte_at(&self, addr: usize) -> u8 {
        self.bytes[addr]
    }
}
