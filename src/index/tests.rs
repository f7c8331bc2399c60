use half::f16;

use super::lexical::LexicalIndex;
use super::model::SearchHit;
use super::vector::{dot_f16_f32, f16_to_f32_vec, f32_to_f16_vec, VectorIndex};
use super::{IndexBackend, SimilarityIndex};
use crate::catalog::{Assessment, CatalogStore, TestType};
use crate::embedding::SentenceEncoder;

fn assessment(url: &str, name: &str, description: &str, skills: &[&str]) -> Assessment {
    Assessment {
        url: url.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        test_type: TestType::Knowledge,
        duration_minutes: 30,
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

fn sample_store() -> CatalogStore {
    CatalogStore::from_assessments(vec![
        assessment(
            "https://x/java",
            "Java Programming Test",
            "Core Java language knowledge for developers",
            &["java", "programming"],
        ),
        assessment(
            "https://x/python",
            "Python Coding Assessment",
            "Python scripting and data handling",
            &["python"],
        ),
        assessment(
            "https://x/opq",
            "Workplace Personality Profile",
            "Behavioral tendencies and teamwork style",
            &["teamwork", "communication"],
        ),
    ])
    .unwrap()
}

#[test]
fn test_backend_from_str() {
    assert_eq!("vector".parse::<IndexBackend>().unwrap(), IndexBackend::Vector);
    assert_eq!(
        " Lexical ".parse::<IndexBackend>().unwrap(),
        IndexBackend::Lexical
    );
    assert!("faiss".parse::<IndexBackend>().is_err());
}

#[test]
fn test_vector_index_build_indexes_whole_catalog() {
    let store = sample_store();
    let index = VectorIndex::build(&store, SentenceEncoder::stub().unwrap()).unwrap();
    assert_eq!(index.len(), 3);
}

#[test]
fn test_vector_search_is_sorted_and_bounded() {
    let store = sample_store();
    let index = VectorIndex::build(&store, SentenceEncoder::stub().unwrap()).unwrap();

    let hits = index.search("java developer", 2).unwrap();
    assert_eq!(hits.len(), 2);
    assert!(hits[0].score >= hits[1].score);
}

#[test]
fn test_vector_search_k_larger_than_catalog() {
    let store = sample_store();
    let index = VectorIndex::build(&store, SentenceEncoder::stub().unwrap()).unwrap();

    let hits = index.search("anything", 50).unwrap();
    assert_eq!(hits.len(), 3);
}

#[test]
fn test_vector_search_has_no_duplicate_ids() {
    let store = sample_store();
    let index = VectorIndex::build(&store, SentenceEncoder::stub().unwrap()).unwrap();

    let hits = index.search("test", 50).unwrap();
    let mut ids: Vec<u64> = hits.iter().map(|h| h.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), hits.len());
}

#[test]
fn test_vector_search_is_deterministic() {
    let store = sample_store();
    let index = VectorIndex::build(&store, SentenceEncoder::stub().unwrap()).unwrap();

    let a = index.search("python data role", 3).unwrap();
    let b = index.search("python data role", 3).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_lexical_scores_count_matching_tokens() {
    let store = sample_store();
    let index = LexicalIndex::build(&store);

    let hits = index.search("python scripting", 3).unwrap();
    let python_id = store.assessments()[1].id();
    assert_eq!(hits[0].id, python_id);
    // "python" and "scripting" both occur in the python document.
    assert_eq!(hits[0].score, 2.0);
}

#[test]
fn test_lexical_short_tokens_are_ignored() {
    let store = sample_store();
    let index = LexicalIndex::build(&store);

    // "for" (3 chars) is below the token length floor even though it
    // appears in a document.
    let hits = index.search("for for for", 3).unwrap();
    assert!(hits.iter().all(|h| h.score == 0.0));
}

#[test]
fn test_lexical_zero_scores_are_returned_not_dropped() {
    let store = sample_store();
    let index = LexicalIndex::build(&store);

    let hits = index.search("zzzz qqqq", 3).unwrap();
    assert_eq!(hits.len(), 3);
    assert!(hits.iter().all(|h| h.score == 0.0));
}

#[test]
fn test_lexical_ties_keep_catalog_order() {
    let store = sample_store();
    let index = LexicalIndex::build(&store);

    let hits = index.search("zzzz", 3).unwrap();
    let expected: Vec<u64> = store.assessments().iter().map(|a| a.id()).collect();
    let got: Vec<u64> = hits.iter().map(|h| h.id).collect();
    assert_eq!(got, expected);
}

#[test]
fn test_lexical_matches_are_case_insensitive() {
    let store = sample_store();
    let index = LexicalIndex::build(&store);

    let hits = index.search("PYTHON", 1).unwrap();
    assert_eq!(hits[0].id, store.assessments()[1].id());
    assert_eq!(hits[0].score, 1.0);
}

#[test]
fn test_dot_f16_f32_unit_vectors() {
    let a = f32_to_f16_vec(&[1.0, 0.0, 0.0]);
    assert_eq!(dot_f16_f32(&a, &[1.0, 0.0, 0.0]), 1.0);
    assert_eq!(dot_f16_f32(&a, &[0.0, 1.0, 0.0]), 0.0);
}

#[test]
fn test_dot_f16_f32_mismatched_lengths_score_zero() {
    let a = vec![f16::from_f32(1.0)];
    assert_eq!(dot_f16_f32(&a, &[1.0, 0.0]), 0.0);
    assert_eq!(dot_f16_f32(&[], &[]), 0.0);
}

#[test]
fn test_f16_round_trip_is_close() {
    let original = vec![0.25f32, -0.5, 0.125];
    let round_tripped = f16_to_f32_vec(&f32_to_f16_vec(&original));
    for (a, b) in original.iter().zip(round_tripped.iter()) {
        assert!((a - b).abs() < 1e-3);
    }
}

#[test]
fn test_search_hit_new() {
    let hit = SearchHit::new(42, 0.5);
    assert_eq!(hit.id, 42);
    assert_eq!(hit.score, 0.5);
}
