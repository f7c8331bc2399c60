use std::sync::Arc;

use super::ResultCache;
use crate::hashing::hash_request;

#[test]
fn test_lookup_miss_returns_none() {
    let cache = ResultCache::new();
    let hash = hash_request("java developer", 10, None);
    assert!(cache.lookup(&hash).is_none());
}

#[test]
fn test_insert_then_lookup_hits() {
    let cache = ResultCache::new();
    let hash = hash_request("java developer", 10, None);

    cache.insert(hash, Arc::new(Vec::new()));

    let hit = cache.lookup(&hash).expect("should hit");
    assert!(hit.is_empty());
}

#[test]
fn test_distinct_requests_do_not_collide() {
    let cache = ResultCache::new();
    cache.insert(hash_request("q", 10, None), Arc::new(Vec::new()));

    assert!(cache.lookup(&hash_request("q", 5, None)).is_none());
    assert!(cache.lookup(&hash_request("q", 10, Some(30))).is_none());
}

#[test]
fn test_hit_shares_the_same_allocation() {
    let cache = ResultCache::new();
    let hash = hash_request("q", 10, None);
    let value = Arc::new(Vec::new());

    cache.insert(hash, Arc::clone(&value));
    let hit = cache.lookup(&hash).unwrap();

    assert!(Arc::ptr_eq(&value, &hit));
}
