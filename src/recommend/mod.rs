//! The recommendation pipeline.
//!
//! [`Recommender`] owns the catalog, the similarity index, and an optional
//! result cache, and orchestrates one `recommend()` call:
//! interpret → retrieve → filter → score → sort → balance → truncate.
//!
//! The recommender is constructed explicitly at startup (see
//! [`Recommender::from_config`]) and injected into whatever transport layer
//! sits above it; there is no process-wide singleton.

pub mod error;
pub mod pipeline;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::RecommendError;
pub use pipeline::Recommender;
pub use types::Recommendation;
