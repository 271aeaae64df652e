//! Hexer
//!
//! Interactive terminal hex viewer. Opens a binary file through an
//! in-terminal picker and renders a paginated hex+ASCII dump with
//! keyboard navigation and bookmark-driven byte highlighting.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
