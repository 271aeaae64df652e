//! Domain model: the loaded file, bookmarks, key actions, and errors.

pub mod bookmark;
pub mod byte_buffer;
pub mod error;
pub mod key_action;

pub use bookmark::{Bookmark, BookmarkError, BookmarkTable};
pub use byte_buffer::ByteBuffer;
pub use error::{AppError, InputError};
pub use key_action::KeyAction;
