use serde::{Deserialize, Serialize};

use crate::hashing::hash_url;

/// Closed category of an assessment.
///
/// The catalog file encodes these as single-letter codes (`"K"`, `"P"`,
/// `"C"`); full names are accepted as aliases. Anything else fails
/// deserialization, so unrecognized categories are rejected at ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestType {
    /// Knowledge / skill test.
    #[serde(rename = "K", alias = "Knowledge")]
    Knowledge,
    /// Personality / behavioral test.
    #[serde(rename = "P", alias = "Personality")]
    Personality,
    /// Cognitive ability test.
    #[serde(rename = "C", alias = "Cognitive")]
    Cognitive,
}

impl TestType {
    /// Returns the single-letter catalog code.
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            TestType::Knowledge => "K",
            TestType::Personality => "P",
            TestType::Cognitive => "C",
        }
    }
}

impl std::fmt::Display for TestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One catalog entry: a single hiring test product.
///
/// Immutable after ingestion. Identity is the url (unique within a catalog);
/// [`Assessment::id`] derives a stable 64-bit key from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Product page url. Unique, non-empty.
    pub url: String,
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Closed test-type category.
    pub test_type: TestType,
    /// Completion time in minutes. Positive.
    pub duration_minutes: u32,
    /// Skills exercised by the test. Deduplicated at ingestion.
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Assessment {
    /// Stable 64-bit identity derived from the url.
    #[inline]
    pub fn id(&self) -> u64 {
        hash_url(&self.url)
    }

    /// The text representation that is embedded / indexed:
    /// name, description, and skills joined by spaces.
    pub fn document_text(&self) -> String {
        let mut text =
            String::with_capacity(self.name.len() + self.description.len() + 32);
        text.push_str(&self.name);
        text.push(' ');
        text.push_str(&self.description);
        for skill in &self.skills {
            text.push(' ');
            text.push_str(skill);
        }
        text
    }

    /// Returns `true` if the assessment tests the given skill (exact match).
    #[inline]
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }
}
