//! Settings file (`hexer.ini`) loading.
//!
//! The settings file is line-oriented; only the first line is used today:
//! trimmed of surrounding whitespace, it names the directory the file
//! picker starts in. A missing file, unreadable file, or empty first line
//! all fall back to a platform default. Malformed content never aborts
//! startup.

use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the settings file, looked up in the working directory.
pub const SETTINGS_FILE: &str = "hexer.ini";

/// Resolved startup settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Directory the file picker is first opened in, when configured.
    pub initial_dir: Option<PathBuf>,
}

impl Settings {
    /// Read settings from `path`. Every failure mode yields defaults.
    pub fn load(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                debug!("No settings at {}: {err}", path.display());
                return Self::default();
            }
        };

        let first_line = contents.lines().next().unwrap_or("").trim();
        if first_line.is_empty() {
            return Self::default();
        }

        Self {
            initial_dir: Some(PathBuf::from(first_line)),
        }
    }

    /// The directory the picker should start in.
    ///
    /// Falls back to the user's home directory, then to the current
    /// directory, when no usable directory is configured.
    pub fn picker_start_dir(&self) -> PathBuf {
        if let Some(dir) = &self.initial_dir {
            if dir.is_dir() {
                return dir.clone();
            }
            debug!("Configured directory {} is unusable", dir.display());
        }
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
    }
}
