//! Requirement-match re-scoring.
//!
//! Base similarity from the index is combined with requirement-match boosts
//! into a final ranking score per candidate. All functions here are pure and
//! total over well-formed inputs; duration filtering happens upstream in the
//! pipeline (a filter, not a penalty).

pub mod scorer;
pub mod types;


pub use scorer::{requirement_boost, score_candidate};
pub use types::Candidate;
