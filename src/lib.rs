//! Shortlist: assessment recommendation engine.
//!
//! Turns a free-text hiring query into a category-balanced, deterministic
//! ranked list of assessment products from a fixed catalog.
//!
//! # Pipeline
//!
//! ```text
//! query text ── parse ──► Requirements
//! query text ── index ──► raw candidates
//! (Requirements, candidates) ── score ──► scored candidates
//! (scored, Requirements) ── balance ──► final list (≤ top_k)
//! ```
//!
//! # Public API Surface
//!
//! - [`Recommender`] - the engine; build with [`Recommender::from_config`]
//!   at startup and call [`Recommender::recommend`] per request
//! - [`Config`], [`ConfigError`] - environment-backed configuration
//! - [`CatalogStore`], [`Assessment`], [`TestType`] - the immutable catalog
//! - [`Requirements`], [`parse_query`] - query interpretation
//! - [`SimilarityIndex`], [`VectorIndex`], [`LexicalIndex`] - retrieval
//!   backends behind one contract
//! - [`SentenceEncoder`], [`EncoderConfig`] - the embedding backend
//!   (stub mode available for tests)
//! - [`Recommendation`], [`RecommendError`] - response rows and the error
//!   taxonomy
//!
//! All shared state (catalog, index) is immutable after startup, so one
//! [`Recommender`] serves concurrent callers without locking.

pub mod balance;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod hashing;
pub mod index;
pub mod query;
pub mod recommend;
pub mod scoring;

pub use balance::balance;
pub use cache::{DEFAULT_CACHE_CAPACITY, ResultCache};
pub use catalog::{Assessment, CatalogError, CatalogStore, TestType};
pub use config::{Config, ConfigError};
pub use constants::{
    DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_SEQ_LEN, DEFAULT_SEARCH_K, DEFAULT_TIME_LIMIT_MINS,
    DimValidationError, EMBEDDING_F16_BYTES, SKILL_BOOST_STEP, TYPE_MATCH_BOOST,
    validate_embedding_dim,
};
pub use embedding::{EmbeddingError, EncoderConfig, SentenceEncoder};
pub use hashing::{hash_request, hash_to_u64, hash_url};
pub use index::{
    IndexBackend, IndexError, LexicalIndex, SearchHit, SimilarityIndex, VectorIndex,
};
#[cfg(any(test, feature = "mock"))]
pub use index::MockSimilarityIndex;
pub use query::{ExperienceLevel, Requirements, TestTypeSet, parse_query};
pub use recommend::{Recommendation, RecommendError, Recommender};
pub use scoring::{Candidate, requirement_boost, score_candidate};
