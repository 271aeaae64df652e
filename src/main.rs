//! Hexer - Entry Point

use clap::Parser;
use hexer::config::{settings::SETTINGS_FILE, Settings};
use std::path::{Path, PathBuf};
use tracing::info;

/// Interactive terminal hex viewer.
#[derive(Parser, Debug)]
#[command(name = "hexer")]
#[command(version)]
#[command(about = "Interactive terminal hex viewer with bookmark highlighting")]
struct Args {
    /// Path to the log file for tracing output
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // hexer.ini in the working directory, read once. Missing or malformed
    // settings silently fall back to defaults.
    let settings = Settings::load(Path::new(SETTINGS_FILE));

    let log_path = args.log_file.unwrap_or_else(hexer::logging::default_log_path);
    hexer::logging::init(&log_path)?;

    info!(settings = ?settings, "Starting {}", hexer::view::program_title());

    hexer::view::run(settings)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_does_not_error() {
        let result = Args::try_parse_from(["hexer", "--help"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::DisplayHelp
        );
    }

    #[test]
    fn version_does_not_error() {
        let result = Args::try_parse_from(["hexer", "--version"]);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::DisplayVersion
        );
    }

    #[test]
    fn no_args_by_default() {
        let args = Args::parse_from(["hexer"]);
        assert_eq!(args.log_file, None);
    }

    #[test]
    fn positional_arguments_are_rejected() {
        let result = Args::try_parse_from(["hexer", "some-file.bin"]);
        assert!(result.is_err());
    }

    #[test]
    fn log_file_override() {
        let args = Args::parse_from(["hexer", "--log-file", "/tmp/hexer.log"]);
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/hexer.log")));
    }
}
