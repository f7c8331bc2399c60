use serde::Serialize;

use crate::catalog::TestType;
use crate::hashing::hash_url;
use crate::scoring::Candidate;

/// One row of a recommendation response.
///
/// Field names serialize to the wire names the transport layer expects
/// (`assessment_name`, `assessment_url`, `relevance_score`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Display name.
    #[serde(rename = "assessment_name")]
    pub name: String,
    /// Product url; the assessment's unique identity.
    #[serde(rename = "assessment_url")]
    pub url: String,
    /// Test-type category.
    pub test_type: TestType,
    /// Completion time in minutes.
    pub duration_minutes: u32,
    /// Skills exercised by the test.
    pub skills: Vec<String>,
    /// Final ranking score (similarity × boost).
    #[serde(rename = "relevance_score")]
    pub final_score: f32,
}

impl Recommendation {
    /// Builds a response row from a scored candidate.
    pub fn from_candidate(candidate: &Candidate) -> Self {
        Self {
            name: candidate.assessment.name.clone(),
            url: candidate.assessment.url.clone(),
            test_type: candidate.assessment.test_type,
            duration_minutes: candidate.assessment.duration_minutes,
            skills: candidate.assessment.skills.clone(),
            final_score: candidate.final_score,
        }
    }

    /// Stable identity derived from the url.
    #[inline]
    pub fn id(&self) -> u64 {
        hash_url(&self.url)
    }
}
