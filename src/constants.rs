//! Cross-cutting, shared constants.
//!
//! Prefer deriving secondary constants (e.g. byte sizes) from primary ones to avoid drift.

/// Embedding dimension of the sentence encoder (MiniLM-class models).
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Bytes per corpus vector when stored as little-endian f16.
pub const EMBEDDING_F16_BYTES: usize = DEFAULT_EMBEDDING_DIM * 2;

/// Token truncation limit for encoder input.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Fallback time budget (minutes) when the query carries no time signal.
pub const DEFAULT_TIME_LIMIT_MINS: u32 = 120;

/// Retrieval headroom: candidates requested from the index before filtering.
pub const DEFAULT_SEARCH_K: usize = 50;

/// Per-matched-skill increment of the multiplicative boost.
pub const SKILL_BOOST_STEP: f32 = 0.2;

/// Multiplier applied when the candidate's test type is among the requested ones.
pub const TYPE_MATCH_BOOST: f32 = 1.3;

/// Error returned when dimension validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimValidationError {
    /// Embedding dimension cannot be zero.
    ZeroDimension,
    /// Runtime dimension does not match expected dimension.
    DimensionMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for DimValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "embedding dimension cannot be zero"),
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "dimension mismatch: expected {}, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for DimValidationError {}

/// Validates that a runtime embedding dimension matches the expected dimension.
///
/// Use this at the encoder/index boundary to catch mismatches early, rather than
/// encountering silently wrong similarity scores deep in the pipeline.
pub fn validate_embedding_dim(actual: usize, expected: usize) -> Result<(), DimValidationError> {
    if expected == 0 {
        return Err(DimValidationError::ZeroDimension);
    }
    if actual != expected {
        return Err(DimValidationError::DimensionMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_byte_size() {
        assert_eq!(EMBEDDING_F16_BYTES, DEFAULT_EMBEDDING_DIM * 2);
    }

    #[test]
    fn test_validate_embedding_dim_match() {
        assert!(validate_embedding_dim(384, 384).is_ok());
    }

    #[test]
    fn test_validate_embedding_dim_mismatch() {
        assert_eq!(
            validate_embedding_dim(768, 384),
            Err(DimValidationError::DimensionMismatch {
                expected: 384,
                actual: 768
            })
        );
    }

    #[test]
    fn test_validate_embedding_dim_zero() {
        assert_eq!(
            validate_embedding_dim(0, 0),
            Err(DimValidationError::ZeroDimension)
        );
    }

    #[test]
    fn test_error_display() {
        let err = DimValidationError::DimensionMismatch {
            expected: 384,
            actual: 768,
        };
        assert!(err.to_string().contains("384"));
        assert!(err.to_string().contains("768"));
    }
}
