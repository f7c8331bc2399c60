//! Similarity index: query text → ranked candidate assessments.
//!
//! Two interchangeable variants satisfy the same [`SimilarityIndex`]
//! contract: [`VectorIndex`] (embedding nearest-neighbor) and
//! [`LexicalIndex`] (term-overlap). The pipeline is agnostic to which one is
//! behind the trait.
//!
//! Index construction is a one-time startup step. Built indexes are
//! immutable and support concurrent read-only queries.

pub mod error;
pub mod lexical;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod model;
pub mod vector;

#[cfg(test)]
mod tests;

pub use error::IndexError;
pub use lexical::LexicalIndex;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockSimilarityIndex;
pub use model::SearchHit;
pub use vector::VectorIndex;

/// Which index variant to build at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexBackend {
    /// Embedding nearest-neighbor search.
    #[default]
    Vector,
    /// Token-overlap scoring (no model files required).
    Lexical,
}

impl std::str::FromStr for IndexBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vector" => Ok(IndexBackend::Vector),
            "lexical" => Ok(IndexBackend::Lexical),
            other => Err(format!("unknown index backend '{other}'")),
        }
    }
}

impl std::fmt::Display for IndexBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexBackend::Vector => write!(f, "vector"),
            IndexBackend::Lexical => write!(f, "lexical"),
        }
    }
}

/// Ranked retrieval over the catalog.
///
/// `search` returns at most `min(k, catalog size)` hits, sorted by
/// descending score with no duplicate ids. Ties keep a stable order, so
/// repeated calls yield identical rankings.
pub trait SimilarityIndex: Send + Sync {
    /// Scores the catalog against `query` and returns the top `k` hits.
    fn search(&self, query: &str, k: usize) -> Result<Vec<SearchHit>, IndexError>;

    /// Number of indexed assessments.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is indexed.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
