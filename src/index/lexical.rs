use std::cmp::Ordering;

use tracing::{debug, info};

use crate::catalog::CatalogStore;

use super::error::IndexError;
use super::model::SearchHit;
use super::SimilarityIndex;

/// Minimum token length considered by the overlap scorer. Shorter tokens
/// ("a", "for", "the") are mostly noise.
const MIN_TOKEN_LEN: usize = 4;

/// Term-overlap index: one point per query token found in the assessment's
/// concatenated text.
///
/// The fallback/alternative retrieval backend. Requires no model files and
/// builds in O(catalog size). Zero-score hits are returned as-is; the
/// pipeline filters them.
#[derive(Debug)]
pub struct LexicalIndex {
    ids: Vec<u64>,
    documents: Vec<String>,
}

impl LexicalIndex {
    /// Lowercases every assessment's document text and builds the index.
    pub fn build(store: &CatalogStore) -> Self {
        let mut ids = Vec::with_capacity(store.len());
        let mut documents = Vec::with_capacity(store.len());

        for assessment in store.iter() {
            ids.push(assessment.id());
            documents.push(assessment.document_text().to_lowercase());
        }

        info!(assessments = ids.len(), "Lexical index built");

        Self { ids, documents }
    }

    fn overlap_score(query_tokens: &[&str], document: &str) -> f32 {
        query_tokens
            .iter()
            .filter(|token| document.contains(**token))
            .count() as f32
    }
}

impl SimilarityIndex for LexicalIndex {
    fn search(&self, query: &str, k: usize) -> Result<Vec<SearchHit>, IndexError> {
        let query = query.to_lowercase();
        let tokens: Vec<&str> = query
            .split_whitespace()
            .filter(|token| token.len() >= MIN_TOKEN_LEN)
            .collect();

        let mut hits: Vec<SearchHit> = self
            .ids
            .iter()
            .zip(self.documents.iter())
            .map(|(&id, document)| SearchHit::new(id, Self::overlap_score(&tokens, document)))
            .collect();

        // Stable sort: ties keep catalog order.
        hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        hits.truncate(k);

        debug!(
            tokens = tokens.len(),
            k,
            returned = hits.len(),
            "Lexical search complete"
        );

        Ok(hits)
    }

    fn len(&self) -> usize {
        self.ids.len()
    }
}
