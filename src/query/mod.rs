//! Query interpretation: free text → structured [`Requirements`].
//!
//! Parsing is a deterministic, pure function of the lower-cased query text.
//! The recognized skill and test-type keywords form a fixed closed
//! vocabulary; it is not user-extensible.

pub mod parser;
pub mod types;


pub use parser::parse_query;
pub use types::{ExperienceLevel, Requirements, TestTypeSet};
