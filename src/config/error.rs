//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Backend name is not one of the supported variants.
    #[error("invalid index backend '{value}': expected 'vector' or 'lexical'")]
    InvalidBackend { value: String },

    /// Search headroom could not be parsed as a number.
    #[error("failed to parse search k '{value}': {source}")]
    SearchKParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Search headroom must be positive.
    #[error("invalid search k '{value}': must be at least 1")]
    InvalidSearchK { value: String },

    /// The vector backend needs a model directory.
    #[error("vector backend requires a model directory (set {var})")]
    MissingModelDir { var: &'static str },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a file (when a file was expected).
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },

    /// Path exists but is not a directory (when a directory was expected).
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}
