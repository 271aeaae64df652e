//! Error types for the hexer application.
//!
//! A small hierarchy built on `thiserror`: [`AppError`] is the top-level
//! type returned from application logic, wrapping [`InputError`] (file
//! loading) and terminal I/O errors. File-load failures are handled at the
//! call site and reported to the user; they never abort the program.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to load a file into the byte buffer.
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Terminal I/O failure during setup, rendering, or teardown.
    #[error("Terminal IO error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Failure to read a file into memory.
///
/// Carries the offending path so the log line is actionable. The viewer
/// treats every variant the same way: the previous buffer (if any) stays
/// loaded and the failure is logged.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// Any other read failure (permissions, out of memory, ...).
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_converts_to_app_error() {
        let err = InputError::FileNotFound {
            path: PathBuf::from("/no/such/file"),
        };
        let app: AppError = err.into();
        assert!(matches!(app, AppError::Input(_)));
    }

    #[test]
    fn file_not_found_display_includes_path() {
        let err = InputError::FileNotFound {
            path: PathBuf::from("/no/such/file"),
        };
        assert!(err.to_string().contains("/no/such/file"));
    }

    #[test]
    fn io_error_converts_to_app_error() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let app: AppError = io.into();
        assert!(matches!(app, AppError::Terminal(_)));
    }
}
