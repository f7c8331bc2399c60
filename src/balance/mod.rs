//! Category balancing of ranked candidates.
//!
//! When a query signals more than one test-type need, the top of the ranking
//! is redistributed so no single category dominates. With zero or one
//! signaled type this is the identity function.


use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::catalog::TestType;
use crate::query::Requirements;
use crate::scoring::Candidate;

/// Redistributes `sorted_candidates` (descending final score) across the
/// requested test types.
///
/// Each type present in `requirements.test_types` gets up to
/// `top_k / |test_types|` slots, filled with that type's best candidates in
/// their existing order; types are visited in the set's insertion order, so
/// the result is deterministic for a given requirements object. Remaining
/// slots are backfilled from the full ranking. Membership is keyed by
/// assessment id, never by field equality, so records that merely look alike
/// are handled correctly.
pub fn balance(
    sorted_candidates: Vec<Candidate>,
    requirements: &Requirements,
    top_k: usize,
) -> Vec<Candidate> {
    if requirements.test_types.len() <= 1 {
        let mut candidates = sorted_candidates;
        candidates.truncate(top_k);
        return candidates;
    }

    let mut by_type: HashMap<TestType, Vec<&Candidate>> = HashMap::new();
    for candidate in &sorted_candidates {
        by_type.entry(candidate.test_type()).or_default().push(candidate);
    }

    let slots_per_type = top_k / requirements.test_types.len();

    let mut selected_ids: HashSet<u64> = HashSet::with_capacity(top_k);
    let mut balanced: Vec<Candidate> = Vec::with_capacity(top_k);

    for test_type in requirements.test_types.iter() {
        if let Some(bucket) = by_type.get(test_type) {
            for candidate in bucket.iter().take(slots_per_type) {
                if selected_ids.insert(candidate.id()) {
                    balanced.push((*candidate).clone());
                }
            }
        }
    }

    // Backfill from the original ranking until top_k or exhaustion.
    if balanced.len() < top_k {
        for candidate in &sorted_candidates {
            if balanced.len() >= top_k {
                break;
            }
            if selected_ids.insert(candidate.id()) {
                balanced.push(candidate.clone());
            }
        }
    }

    debug!(
        requested_types = requirements.test_types.len(),
        slots_per_type,
        selected = balanced.len(),
        "Balanced recommendations"
    );

    balanced
}
