//! Error handling for the Packsmith CLI.
//!
//! `CliError` wraps the assembler's `ConfigError` and adds the failures that
//! only exist at the command line: unreadable input files, bad flag layering,
//! and child process problems. Every error is fatal; `main` reports it and
//! exits non-zero.

mod miette;

use std::path::PathBuf;
use thiserror::Error;

pub use self::miette::{cli_error_to_miette, install_report_handler};
pub use packsmith_config::ConfigError;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Entry validation and option parsing failures
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid command-line arguments or flag layering
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input file doesn't exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system or stream operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure to start or wait on a child process
    #[error("Failed to run `{command}`: {reason}")]
    Process { command: String, reason: String },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into `FileNotFound` for `path`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use std::path::Path;
    /// # use packsmith_cli::error::{Result, ResultExt};
    /// # fn run() -> Result<()> {
    /// let path = Path::new("packsmith.config.json");
    /// std::fs::read_to_string(path).with_path(path)?;
    /// # Ok(())
    /// # }
    /// ```
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            CliError::Config(ConfigError::Io(io_err))
                if io_err.kind() == std::io::ErrorKind::NotFound =>
            {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_converts() {
        let err: CliError = ConfigError::InvalidValue("bad".to_string()).into();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().starts_with("Configuration error:"));
    }

    #[test]
    fn with_path_maps_not_found() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));
        let err = result.with_path("/input.json").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(ref p) if p.ends_with("input.json")));
    }

    #[test]
    fn with_path_maps_config_not_found() {
        let result: std::result::Result<(), ConfigError> = Err(ConfigError::Io(
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        ));
        let err = result.with_path("input.json").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn with_path_keeps_other_errors() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result.with_path("input.json").unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn process_error_names_command() {
        let err = CliError::Process {
            command: "npm init".to_string(),
            reason: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to run `npm init`: not found");
    }
}
