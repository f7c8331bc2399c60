//! Sentence embedding backend for the vector index.
//!
//! [`SentenceEncoder`] wraps a BERT-class sentence-transformer loaded via
//! candle, with a deterministic stub backend for tests and environments
//! without model files (see [`EncoderConfig::stub`]).

/// BERT wrapper producing mean-pooled sentence embeddings.
pub mod bert;
/// Encoder configuration.
pub mod config;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
/// The encoder facade (model or stub backend).
pub mod encoder;
mod error;


pub use config::EncoderConfig;
pub use encoder::SentenceEncoder;
pub use error::EmbeddingError;
