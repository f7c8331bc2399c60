use thiserror::Error;

use crate::constants::DimValidationError;
use crate::embedding::EmbeddingError;

/// Errors surfaced by index construction or search.
///
/// Mid-query failures are reported to the caller as a failed recommendation
/// attempt; the core never retries them.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The embedding backend failed.
    #[error("embedding backend error: {0}")]
    Embedding(#[from] EmbeddingError),

    /// A corpus or query vector had the wrong dimension.
    #[error("dimension validation failed: {0}")]
    Dimension(#[from] DimValidationError),
}
