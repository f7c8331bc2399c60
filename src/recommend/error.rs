use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::embedding::EmbeddingError;
use crate::index::IndexError;

/// Errors surfaced by the recommendation pipeline.
///
/// Startup-time variants (`Catalog`, `Config`, `Embedding`) prevent the
/// recommender from being built at all. `Index` covers backend failures
/// mid-query; those are reported to the caller as a failed attempt and never
/// retried by the core. An empty result list is a success, not an error.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// Query was empty or whitespace-only.
    #[error("invalid input: query must not be empty")]
    InvalidInput,

    /// Catalog could not be loaded or validated (startup).
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration was invalid (startup).
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Embedding backend could not be initialized (startup).
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    /// Index construction or search failed.
    #[error("index error: {0}")]
    Index(#[from] IndexError),
}
