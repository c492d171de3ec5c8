//! Error types for entry validation and option parsing.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Entry validation errors
    #[error("invalid entry with key {key}: {path} has no file extension")]
    MissingExtension { key: String, path: String },

    #[error("invalid file extension \"{extension}\" in entry with key {key}: {path}")]
    UnsupportedExtension {
        key: String,
        extension: String,
        path: String,
    },

    #[error("invalid plugins format in entry with key {key}: expected a list, found {found}")]
    InvalidPluginList { key: String, found: String },

    #[error("invalid entry with key {key}: {reason}")]
    InvalidEntry { key: String, reason: String },

    // Option parsing errors
    #[error("you passed the {field} prop to createConfig. Did you mean to pass {expected}?")]
    MisplacedOptionField {
        field: &'static str,
        expected: &'static str,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    // Package descriptor errors
    #[error("invalid package descriptor {}: {reason}", .path.display())]
    InvalidPackage { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
