use std::cmp::Ordering;

use super::error::IndexError;
use super::model::SearchHit;
use super::SimilarityIndex;

/// Scripted index for tests: returns a fixed hit list for every query.
///
/// Hits are re-sorted by descending score on each search (stable, so equal
/// scores keep the order they were supplied in), mirroring the real
/// backends' contract.
pub struct MockSimilarityIndex {
    hits: Vec<SearchHit>,
}

impl MockSimilarityIndex {
    /// Creates a mock serving the given hits.
    pub fn new(hits: Vec<SearchHit>) -> Self {
        Self { hits }
    }

    /// Creates a mock where every id gets the same score.
    pub fn uniform(ids: impl IntoIterator<Item = u64>, score: f32) -> Self {
        Self::new(
            ids.into_iter()
                .map(|id| SearchHit::new(id, score))
                .collect(),
        )
    }
}

impl SimilarityIndex for MockSimilarityIndex {
    fn search(&self, _query: &str, k: usize) -> Result<Vec<SearchHit>, IndexError> {
        let mut hits = self.hits.clone();
        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        hits.truncate(k);
        Ok(hits)
    }

    fn len(&self) -> usize {
        self.hits.len()
    }
}
