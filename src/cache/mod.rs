//! Exact-match memoization of recommendation results.
//!
//! `recommend()` is a deterministic function of (query, top_k, time_limit)
//! for a fixed catalog and index, so identical requests can be answered from
//! an LRU cache without changing observable behavior. Keys are 32-byte
//! BLAKE3 request hashes.

#[cfg(test)]
mod tests;

use std::sync::Arc;

use moka::sync::Cache;

use crate::recommend::Recommendation;

/// Default number of memoized requests.
pub const DEFAULT_CACHE_CAPACITY: u64 = 1024;

/// In-memory result cache keyed by request hash.
///
/// Concurrent reads and inserts are safe; values are shared via `Arc` so a
/// hit never clones the recommendation list.
pub struct ResultCache {
    entries: Cache<[u8; 32], Arc<Vec<Recommendation>>>,
}

impl ResultCache {
    /// Creates a cache with the default capacity.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Creates a cache with a max entry capacity (LRU eviction).
    #[inline]
    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            entries: Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// Looks up a memoized result by request hash.
    #[inline]
    pub fn lookup(&self, hash: &[u8; 32]) -> Option<Arc<Vec<Recommendation>>> {
        self.entries.get(hash)
    }

    /// Memoizes a result under its request hash.
    #[inline]
    pub fn insert(&self, hash: [u8; 32], recommendations: Arc<Vec<Recommendation>>) {
        self.entries.insert(hash, recommendations);
    }

    /// Number of cached requests.
    #[inline]
    pub fn len(&self) -> u64 {
        self.entries.entry_count()
    }

    /// Returns `true` if nothing is cached.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ResultCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultCache")
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}
