use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, info};

use crate::balance::balance;
use crate::cache::ResultCache;
use crate::catalog::CatalogStore;
use crate::config::Config;
use crate::embedding::{EncoderConfig, SentenceEncoder};
use crate::hashing::hash_request;
use crate::index::{IndexBackend, LexicalIndex, SimilarityIndex, VectorIndex};
use crate::query::parse_query;
use crate::scoring::{score_candidate, Candidate};

use super::error::RecommendError;
use super::types::Recommendation;

/// The recommendation engine: catalog + similarity index + result cache.
///
/// Built once at startup; all shared state is immutable afterwards, so
/// `recommend()` calls are independent pure reads and may run concurrently
/// without locking.
pub struct Recommender {
    store: CatalogStore,
    index: Box<dyn SimilarityIndex>,
    cache: Option<ResultCache>,
    search_k: usize,
}

impl std::fmt::Debug for Recommender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recommender")
            .field("catalog", &self.store.len())
            .field("indexed", &self.index.len())
            .field("cache", &self.cache.is_some())
            .field("search_k", &self.search_k)
            .finish()
    }
}

impl Recommender {
    /// Startup factory: loads the catalog and builds the configured index.
    ///
    /// Any failure here means the process must not serve requests.
    pub fn from_config(config: &Config) -> Result<Self, RecommendError> {
        config.validate()?;

        let store = CatalogStore::load(&config.catalog_path)?;

        let index: Box<dyn SimilarityIndex> = match config.backend {
            IndexBackend::Vector => {
                let encoder_config = EncoderConfig {
                    model_dir: config.model_dir.clone(),
                    ..Default::default()
                };
                let encoder = SentenceEncoder::load(encoder_config)?;
                Box::new(VectorIndex::build(&store, encoder)?)
            }
            IndexBackend::Lexical => Box::new(LexicalIndex::build(&store)),
        };

        info!(
            backend = %config.backend,
            catalog = store.len(),
            "Recommender ready"
        );

        Ok(Self::from_parts(
            store,
            index,
            config.cache_capacity,
            config.search_k,
        ))
    }

    /// Assembles a recommender from pre-built collaborators.
    ///
    /// `cache_capacity` of 0 disables result memoization.
    pub fn from_parts(
        store: CatalogStore,
        index: Box<dyn SimilarityIndex>,
        cache_capacity: u64,
        search_k: usize,
    ) -> Self {
        let cache = (cache_capacity > 0).then(|| ResultCache::with_capacity(cache_capacity));

        Self {
            store,
            index,
            cache,
            search_k,
        }
    }

    /// The catalog backing this recommender.
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Recommends up to `top_k` assessments for a free-text query.
    ///
    /// An explicit `time_limit` (minutes) overrides whatever limit the query
    /// text implies. Returns an empty list (not an error) when nothing
    /// survives filtering.
    pub fn recommend(
        &self,
        query: &str,
        top_k: usize,
        time_limit: Option<u32>,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        if query.trim().is_empty() {
            return Err(RecommendError::InvalidInput);
        }

        let request_hash = hash_request(query, top_k, time_limit);
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.lookup(&request_hash) {
                debug!("Result cache hit");
                return Ok((*hit).clone());
            }
        }

        let requirements = parse_query(query);
        let effective_time_limit = time_limit.unwrap_or(requirements.time_limit);

        let k = self.search_k.min(self.store.len());
        let hits = self.index.search(query, k)?;

        // Zero similarity means "no match"; over-long assessments are
        // excluded before scoring (a filter, not a penalty).
        let mut candidates: Vec<Candidate> = hits
            .iter()
            .filter(|hit| hit.score > 0.0)
            .filter_map(|hit| self.store.get(hit.id).map(|a| (a, hit.score)))
            .filter(|(assessment, _)| assessment.duration_minutes <= effective_time_limit)
            .map(|(assessment, score)| {
                score_candidate(Candidate::new(assessment.clone(), score), &requirements)
            })
            .collect();

        // Stable sort: equal final scores keep the index's retrieval order.
        candidates.sort_by(|a, b| {
            b.final_score
                .partial_cmp(&a.final_score)
                .unwrap_or(Ordering::Equal)
        });

        let balanced = balance(candidates, &requirements, top_k);

        let recommendations: Vec<Recommendation> =
            balanced.iter().map(Recommendation::from_candidate).collect();

        debug!(
            query_len = query.len(),
            top_k,
            effective_time_limit,
            returned = recommendations.len(),
            "Recommendation complete"
        );

        if let Some(cache) = &self.cache {
            cache.insert(request_hash, Arc::new(recommendations.clone()));
        }

        Ok(recommendations)
    }
}
