//! Catalog ingestion error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading and validating the catalog.
///
/// All of these are startup-time conditions: a process that fails to load
/// its catalog must not serve recommendations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not valid JSON (includes unrecognized `test_type` values).
    #[error("failed to parse catalog: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// Catalog parsed but contains zero records.
    #[error("catalog contains no assessments")]
    Empty,

    /// A record failed field validation.
    #[error("invalid assessment record '{name}': {reason}")]
    InvalidRecord { name: String, reason: String },

    /// Two records share the same url.
    #[error("duplicate assessment url: {url}")]
    DuplicateUrl { url: String },
}
