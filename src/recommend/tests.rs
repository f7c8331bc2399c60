use super::error::RecommendError;
use super::pipeline::Recommender;
use super::types::Recommendation;
use crate::catalog::{Assessment, CatalogStore, TestType};
use crate::embedding::SentenceEncoder;
use crate::index::{LexicalIndex, MockSimilarityIndex, VectorIndex};
use crate::scoring::Candidate;

fn assessment(
    url: &str,
    name: &str,
    description: &str,
    test_type: TestType,
    duration: u32,
    skills: &[&str],
) -> Assessment {
    Assessment {
        url: url.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        test_type,
        duration_minutes: duration,
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

fn sample_store() -> CatalogStore {
    CatalogStore::from_assessments(vec![
        assessment(
            "https://x/java",
            "Java Programming Test",
            "Core Java language questions for developers",
            TestType::Knowledge,
            40,
            &["java", "programming"],
        ),
        assessment(
            "https://x/python",
            "Python Coding Assessment",
            "Python scripting exercises",
            TestType::Knowledge,
            45,
            &["python"],
        ),
        assessment(
            "https://x/numerical",
            "Numerical Reasoning Test",
            "Cognitive numerical reasoning problems",
            TestType::Cognitive,
            25,
            &["analytical"],
        ),
        assessment(
            "https://x/opq",
            "Workplace Personality Profile",
            "Behavioral style and teamwork questionnaire",
            TestType::Personality,
            20,
            &["teamwork", "communication"],
        ),
    ])
    .unwrap()
}

fn lexical_recommender() -> Recommender {
    let store = sample_store();
    let index = LexicalIndex::build(&store);
    Recommender::from_parts(store, Box::new(index), 16, 50)
}

fn vector_recommender() -> Recommender {
    let store = sample_store();
    let index = VectorIndex::build(&store, SentenceEncoder::stub().unwrap()).unwrap();
    Recommender::from_parts(store, Box::new(index), 0, 50)
}

#[test]
fn test_empty_query_is_invalid_input() {
    let recommender = lexical_recommender();
    assert!(matches!(
        recommender.recommend("", 10, None),
        Err(RecommendError::InvalidInput)
    ));
    assert!(matches!(
        recommender.recommend("   \t\n", 10, None),
        Err(RecommendError::InvalidInput)
    ));
}

#[test]
fn test_no_matches_is_empty_success() {
    let recommender = lexical_recommender();
    let results = recommender.recommend("zzzz qqqq wwww", 10, None).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_lexical_recommend_finds_relevant_assessment() {
    let recommender = lexical_recommender();
    let results = recommender.recommend("python developer", 10, None).unwrap();

    assert!(!results.is_empty());
    assert_eq!(results[0].url, "https://x/python");
}

#[test]
fn test_explicit_time_limit_overrides_query() {
    let recommender = lexical_recommender();

    // The query says 60 minutes, the caller says 30: the caller wins.
    let results = recommender
        .recommend("60 minutes numerical reasoning test", 10, Some(30))
        .unwrap();

    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r.duration_minutes <= 30));
}

#[test]
fn test_query_time_limit_filters_candidates() {
    let recommender = lexical_recommender();

    let results = recommender
        .recommend("30 minutes reasoning test", 10, None)
        .unwrap();

    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r.duration_minutes <= 30));
}

#[test]
fn test_result_length_bounded_by_top_k() {
    let recommender = lexical_recommender();
    let results = recommender.recommend("test", 2, None).unwrap();
    assert!(results.len() <= 2);
}

#[test]
fn test_top_k_zero_returns_empty() {
    let recommender = lexical_recommender();
    let results = recommender.recommend("python test", 0, None).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_recommend_is_deterministic() {
    let recommender = vector_recommender();
    let a = recommender.recommend("java developer", 4, None).unwrap();
    let b = recommender.recommend("java developer", 4, None).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_cached_and_uncached_results_agree() {
    let store = sample_store();
    let cached = Recommender::from_parts(
        store.clone(),
        Box::new(LexicalIndex::build(&store)),
        16,
        50,
    );
    let uncached = Recommender::from_parts(
        store.clone(),
        Box::new(LexicalIndex::build(&store)),
        0,
        50,
    );

    let query = "python coding test";
    let first = cached.recommend(query, 10, None).unwrap();
    let second = cached.recommend(query, 10, None).unwrap(); // served from cache
    let reference = uncached.recommend(query, 10, None).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, reference);
}

#[test]
fn test_skill_boost_promotes_matching_assessment() {
    let store = sample_store();

    // Every assessment gets the same base similarity; the java skill match
    // must push the java test ahead.
    let index =
        MockSimilarityIndex::uniform(store.assessments().iter().map(|a| a.id()), 1.0);
    let recommender = Recommender::from_parts(store, Box::new(index), 0, 50);

    let results = recommender.recommend("java developer", 4, None).unwrap();
    assert_eq!(results[0].url, "https://x/java");
    assert!(results[0].final_score > results[1].final_score);
}

#[test]
fn test_recommendation_row_carries_assessment_fields() {
    let candidate = Candidate::new(
        assessment(
            "https://x/java",
            "Java Programming Test",
            "desc",
            TestType::Knowledge,
            40,
            &["java"],
        ),
        0.8,
    );

    let row = Recommendation::from_candidate(&candidate);
    assert_eq!(row.name, "Java Programming Test");
    assert_eq!(row.url, "https://x/java");
    assert_eq!(row.test_type, TestType::Knowledge);
    assert_eq!(row.duration_minutes, 40);
    assert_eq!(row.skills, vec!["java"]);
    assert_eq!(row.final_score, 0.8);
    assert_eq!(row.id(), candidate.id());
}

#[test]
fn test_recommendation_serializes_wire_field_names() {
    let row = Recommendation {
        name: "A".to_string(),
        url: "https://x/a".to_string(),
        test_type: TestType::Cognitive,
        duration_minutes: 25,
        skills: vec!["analytical".to_string()],
        final_score: 0.5,
    };

    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(json["assessment_name"], "A");
    assert_eq!(json["assessment_url"], "https://x/a");
    assert_eq!(json["test_type"], "C");
    assert_eq!(json["relevance_score"], 0.5);
}
