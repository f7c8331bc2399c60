use crate::catalog::{Assessment, TestType};

/// An assessment augmented with per-query scores.
///
/// Ephemeral: candidates live for one `recommend()` call and are never
/// persisted or shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Copy of the catalog record.
    pub assessment: Assessment,
    /// Base similarity from the index.
    pub similarity_score: f32,
    /// `similarity_score × boost`; set by the scorer.
    pub final_score: f32,
}

impl Candidate {
    /// Wraps an assessment with its retrieval score. The final score starts
    /// equal to the similarity score until the scorer applies boosts.
    pub fn new(assessment: Assessment, similarity_score: f32) -> Self {
        Self {
            assessment,
            similarity_score,
            final_score: similarity_score,
        }
    }

    /// Stable assessment identity.
    #[inline]
    pub fn id(&self) -> u64 {
        self.assessment.id()
    }

    /// The candidate's test-type category.
    #[inline]
    pub fn test_type(&self) -> TestType {
        self.assessment.test_type
    }

    /// Completion time in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.assessment.duration_minutes
    }
}
