use tracing::trace;

use crate::catalog::Assessment;
use crate::constants::{SKILL_BOOST_STEP, TYPE_MATCH_BOOST};
use crate::query::Requirements;

use super::types::Candidate;

/// Computes the multiplicative requirement-match boost for one assessment.
///
/// Starts at 1.0 and is multiplied (never added to) by each applicable
/// factor, in this order:
///
/// 1. skill intersection: when the requirements carry skills and at least
///    one matches the assessment, `× (1 + 0.2 × |intersection|)`;
/// 2. test-type membership: when the requirements carry test types and the
///    assessment's type is among them, `× 1.3`.
///
/// The order does not affect the numeric result (all factors are
/// multiplicative); it is fixed here so the contract stays explicit. Every
/// factor is ≥ 1.0, so a boost never demotes a candidate.
pub fn requirement_boost(assessment: &Assessment, requirements: &Requirements) -> f32 {
    let mut boost = 1.0;

    if !requirements.skills.is_empty() {
        let matched = requirements
            .skills
            .iter()
            .filter(|skill| assessment.has_skill(skill))
            .count();
        if matched > 0 {
            boost *= 1.0 + SKILL_BOOST_STEP * matched as f32;
        }
    }

    if !requirements.test_types.is_empty()
        && requirements.test_types.contains(assessment.test_type)
    {
        boost *= TYPE_MATCH_BOOST;
    }

    boost
}

/// Applies the requirement boost to a candidate's similarity score.
///
/// Pure: `final_score = similarity_score × boost`, no other state touched.
pub fn score_candidate(mut candidate: Candidate, requirements: &Requirements) -> Candidate {
    let boost = requirement_boost(&candidate.assessment, requirements);
    candidate.final_score = candidate.similarity_score * boost;

    trace!(
        url = %candidate.assessment.url,
        similarity = candidate.similarity_score,
        boost,
        final_score = candidate.final_score,
        "Scored candidate"
    );

    candidate
}
