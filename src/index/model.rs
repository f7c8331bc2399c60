/// One retrieval hit: an assessment id and its similarity score.
///
/// For the vector variant the score is an inner product of unit vectors
/// (practically `[0, 1]` for this domain); for the lexical variant it is a
/// non-negative integer count widened to `f32`. A score of zero means
/// "no match" and is filtered by the pipeline, not by the index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
    /// Stable assessment id ([`Assessment::id`](crate::catalog::Assessment::id)).
    pub id: u64,
    /// Similarity score, higher is closer.
    pub score: f32,
}

impl SearchHit {
    /// Creates a new hit.
    #[inline]
    pub fn new(id: u64, score: f32) -> Self {
        Self { id, score }
    }
}
