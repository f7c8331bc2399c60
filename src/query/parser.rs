use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::catalog::TestType;
use super::types::{ExperienceLevel, Requirements, TestTypeSet};

/// Time-limit extraction rules, evaluated in priority order.
///
/// The first matching pattern wins and its captured number, scaled by the
/// rule's multiplier, becomes the time limit. The order below is a contract:
/// overlapping text ("90 minutes or less than 2 hours") must resolve the
/// same way on every call.
static TIME_RULES: LazyLock<Vec<(Regex, u32)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"(\d+)\s*minutes?").expect("static pattern"), 1),
        (Regex::new(r"(\d+)\s*mins?").expect("static pattern"), 1),
        (Regex::new(r"(\d+)\s*hours?").expect("static pattern"), 60),
        (Regex::new(r"less than (\d+)").expect("static pattern"), 1),
    ]
});

/// Closed skill vocabulary, in iteration order.
const SKILL_VOCABULARY: [&str; 16] = [
    "java",
    "python",
    "sql",
    "javascript",
    "excel",
    "tableau",
    "leadership",
    "communication",
    "sales",
    "analytical",
    "english",
    "collaboration",
    "teamwork",
    "management",
    "marketing",
    "finance",
];

const ENTRY_KEYWORDS: [&str; 4] = ["entry", "graduate", "junior", "new"];
const SENIOR_KEYWORDS: [&str; 3] = ["senior", "lead", "principal"];

const PERSONALITY_KEYWORDS: [&str; 3] = ["personality", "behavior", "cultural fit"];
const COGNITIVE_KEYWORDS: [&str; 3] = ["cognitive", "reasoning", "aptitude"];
const KNOWLEDGE_KEYWORDS: [&str; 4] = ["technical", "skill", "programming", "knowledge"];

/// Skills whose presence implies a Knowledge-type need.
const TECHNICAL_SKILLS: [&str; 4] = ["java", "python", "sql", "javascript"];
/// Skills whose presence implies a Personality-type need.
const SOFT_SKILLS: [&str; 3] = ["communication", "leadership", "collaboration"];

/// Parses a free-text query into structured [`Requirements`].
///
/// Deterministic pure function of the lower-cased query text.
pub fn parse_query(query: &str) -> Requirements {
    let query = query.to_lowercase();

    let time_limit = extract_time_limit(&query);
    let experience_level = extract_experience_level(&query);
    let skills = extract_skills(&query);
    let test_types = extract_test_types(&query, &skills);

    debug!(
        time_limit,
        ?experience_level,
        skills = skills.len(),
        test_types = test_types.len(),
        "Parsed query requirements"
    );

    Requirements {
        skills,
        test_types,
        time_limit,
        experience_level,
    }
}

fn extract_time_limit(query: &str) -> u32 {
    for (pattern, multiplier) in TIME_RULES.iter() {
        if let Some(captures) = pattern.captures(query) {
            if let Ok(value) = captures[1].parse::<u32>() {
                return value * multiplier;
            }
        }
    }
    crate::constants::DEFAULT_TIME_LIMIT_MINS
}

fn extract_experience_level(query: &str) -> ExperienceLevel {
    // Entry is checked before senior; first matching set wins.
    if ENTRY_KEYWORDS.iter().any(|kw| query.contains(kw)) {
        ExperienceLevel::Entry
    } else if SENIOR_KEYWORDS.iter().any(|kw| query.contains(kw)) {
        ExperienceLevel::Senior
    } else {
        ExperienceLevel::Mid
    }
}

fn extract_skills(query: &str) -> Vec<String> {
    SKILL_VOCABULARY
        .iter()
        .filter(|skill| query.contains(*skill))
        .map(|skill| skill.to_string())
        .collect()
}

fn extract_test_types(query: &str, skills: &[String]) -> TestTypeSet {
    let mut test_types = TestTypeSet::new();

    if PERSONALITY_KEYWORDS.iter().any(|kw| query.contains(kw)) {
        test_types.insert(TestType::Personality);
    }
    if COGNITIVE_KEYWORDS.iter().any(|kw| query.contains(kw)) {
        test_types.insert(TestType::Cognitive);
    }
    if KNOWLEDGE_KEYWORDS.iter().any(|kw| query.contains(kw)) {
        test_types.insert(TestType::Knowledge);
    }

    // Skill-category signals are unioned with the keyword signals, never
    // overwriting them.
    let has_technical = skills
        .iter()
        .any(|s| TECHNICAL_SKILLS.contains(&s.as_str()));
    let has_soft = skills.iter().any(|s| SOFT_SKILLS.contains(&s.as_str()));

    if has_technical {
        test_types.insert(TestType::Knowledge);
    }
    if has_soft {
        test_types.insert(TestType::Personality);
    }

    test_types
}
