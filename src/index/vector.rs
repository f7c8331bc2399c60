use std::cmp::Ordering;

use half::f16;
use tracing::{debug, info};

use crate::catalog::CatalogStore;
use crate::constants::validate_embedding_dim;
use crate::embedding::SentenceEncoder;

use super::error::IndexError;
use super::model::SearchHit;
use super::SimilarityIndex;

/// Exact nearest-neighbor index over unit-norm embeddings.
///
/// Corpus vectors are stored as f16 (half the memory of f32, negligible
/// precision loss at catalog scale); queries are scored in f32. Both sides
/// are unit-normalized, so the inner product equals cosine similarity.
pub struct VectorIndex {
    encoder: SentenceEncoder,
    ids: Vec<u64>,
    vectors: Vec<Vec<f16>>,
    dim: usize,
}

impl std::fmt::Debug for VectorIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorIndex")
            .field("len", &self.ids.len())
            .field("dim", &self.dim)
            .finish()
    }
}

impl VectorIndex {
    /// Embeds every assessment's document text and builds the index.
    ///
    /// O(catalog size) encoder passes; failure here must prevent the
    /// process from serving.
    pub fn build(store: &CatalogStore, encoder: SentenceEncoder) -> Result<Self, IndexError> {
        let dim = encoder.embedding_dim();

        let mut ids = Vec::with_capacity(store.len());
        let mut vectors = Vec::with_capacity(store.len());

        for assessment in store.iter() {
            let embedding = encoder.encode(&assessment.document_text())?;
            validate_embedding_dim(embedding.len(), dim)?;

            ids.push(assessment.id());
            vectors.push(f32_to_f16_vec(&embedding));
        }

        info!(
            assessments = ids.len(),
            dim,
            "Vector index built"
        );

        Ok(Self {
            encoder,
            ids,
            vectors,
            dim,
        })
    }

    /// The encoder backing this index.
    pub fn encoder(&self) -> &SentenceEncoder {
        &self.encoder
    }
}

impl SimilarityIndex for VectorIndex {
    fn search(&self, query: &str, k: usize) -> Result<Vec<SearchHit>, IndexError> {
        let query_vec = self.encoder.encode(query)?;
        validate_embedding_dim(query_vec.len(), self.dim)?;

        let mut hits: Vec<SearchHit> = self
            .ids
            .iter()
            .zip(self.vectors.iter())
            .map(|(&id, corpus_vec)| SearchHit::new(id, dot_f16_f32(corpus_vec, &query_vec)))
            .collect();

        // Stable sort: equal scores keep catalog order, making repeated
        // searches identical.
        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        hits.truncate(k);

        debug!(
            query_len = query.len(),
            k,
            returned = hits.len(),
            "Vector search complete"
        );

        Ok(hits)
    }

    fn len(&self) -> usize {
        self.ids.len()
    }
}

/// Inner product of an f16 corpus vector with an f32 query vector.
///
/// Both sides are unit-normalized at encode time, so this equals cosine
/// similarity without re-deriving the norms per row.
#[inline]
pub fn dot_f16_f32(a: &[f16], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    a.iter()
        .zip(b.iter())
        .map(|(av, &bv)| av.to_f32() * bv)
        .sum()
}

/// Narrows an f32 vector to f16 storage.
pub fn f32_to_f16_vec(values: &[f32]) -> Vec<f16> {
    values.iter().map(|&v| f16::from_f32(v)).collect()
}

/// Widens an f16 vector back to f32.
pub fn f16_to_f32_vec(values: &[f16]) -> Vec<f32> {
    values.iter().map(|v| v.to_f32()).collect()
}
