use blake3::Hasher;

/// Computes the 64-bit identity of an assessment from its catalog url.
///
/// The id is the first 8 bytes (64 bits) of a BLAKE3 hash. Truncation is
/// acceptable here: the id is an index/dedup key for catalogs of at most a
/// few thousand records, where the birthday-bound collision probability is
/// negligible. It is not used for cryptographic verification.
#[inline]
pub fn hash_url(url: &str) -> u64 {
    hash_to_u64(url.as_bytes())
}

/// Computes a 64-bit BLAKE3 hash, truncated from 256 bits.
#[inline]
pub fn hash_to_u64(data: &[u8]) -> u64 {
    let hash = blake3::hash(data);
    let bytes: [u8; 8] = hash.as_bytes()[0..8]
        .try_into()
        .expect("BLAKE3 always produces at least 8 bytes");
    u64::from_le_bytes(bytes)
}

/// Computes the 32-byte result-cache key for one recommendation request.
///
/// The key covers every input that affects the output: the raw query text,
/// `top_k`, and the explicit time limit (`u32::MAX` stands in for "none" so
/// that an absent limit and a limit of 0 hash differently).
#[inline]
pub fn hash_request(query: &str, top_k: usize, time_limit: Option<u32>) -> [u8; 32] {
    let mut hasher = Hasher::new();
    hasher.update(query.as_bytes());
    hasher.update(b"|");
    hasher.update(&(top_k as u64).to_le_bytes());
    hasher.update(&time_limit.unwrap_or(u32::MAX).to_le_bytes());
    *hasher.finalize().as_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_url_is_deterministic() {
        let a = hash_url("https://example.com/catalog/view/java-8");
        let b = hash_url("https://example.com/catalog/view/java-8");
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_url_distinguishes_urls() {
        assert_ne!(
            hash_url("https://example.com/catalog/view/java-8"),
            hash_url("https://example.com/catalog/view/python-3")
        );
    }

    #[test]
    fn test_hash_request_covers_all_inputs() {
        let base = hash_request("java developer", 10, None);
        assert_eq!(base, hash_request("java developer", 10, None));
        assert_ne!(base, hash_request("java developer", 5, None));
        assert_ne!(base, hash_request("java developer", 10, Some(30)));
        assert_ne!(base, hash_request("python developer", 10, None));
    }

    #[test]
    fn test_hash_request_none_differs_from_zero() {
        assert_ne!(
            hash_request("q", 10, None),
            hash_request("q", 10, Some(0))
        );
    }
}
