//! Generate-once payload cache.
//!
//! Benchmark suites reuse the same payload across many iterations and
//! across competing implementations; the cache memoizes generation per
//! `(category, size)` pair and hands out cheap shared handles. Payloads
//! are immutable after construction, so shared read-only access needs no
//! locking.

use crate::generators::generate_payload;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use workload_core::DataCategory;

/// Cache of generated byte payloads keyed by category and size.
pub struct PayloadCache {
    /// Seed shared by every payload in this cache.
    seed: u64,
    payloads: HashMap<(DataCategory, usize), Arc<[u8]>>,
}

impl PayloadCache {
    /// Create an empty cache whose payloads derive from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            payloads: HashMap::new(),
        }
    }

    /// Get the cache seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Return the payload for `(category, size)`, generating it on first
    /// request.
    pub fn get_or_generate(&mut self, category: DataCategory, size: usize) -> Arc<[u8]> {
        if let Some(payload) = self.payloads.get(&(category, size)) {
            return Arc::clone(payload);
        }

        debug!(%category, size, "generating payload");
        let payload: Arc<[u8]> = generate_payload(size, category, self.seed).into();
        self.payloads
            .insert((category, size), Arc::clone(&payload));
        payload
    }

    /// Number of distinct payloads held.
    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    /// Whether the cache holds no payloads.
    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_same_allocation() {
        let mut cache = PayloadCache::new(42);
        let a = cache.get_or_generate(DataCategory::Text, 4096);
        let b = cache.get_or_generate(DataCategory::Text, 4096);

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_distinct_keys_distinct_payloads() {
        let mut cache = PayloadCache::new(42);
        let text = cache.get_or_generate(DataCategory::Text, 4096);
        let random = cache.get_or_generate(DataCategory::Random, 4096);
        let larger = cache.get_or_generate(DataCategory::Text, 8192);

        assert_eq!(cache.len(), 3);
        assert_ne!(text[..], random[..]);
        assert_eq!(larger.len(), 8192);
    }

    #[test]
    fn test_matches_direct_generation() {
        let mut cache = PayloadCache::new(42);
        let cached = cache.get_or_generate(DataCategory::Binary, 4096);
        let direct = generate_payload(4096, DataCategory::Binary, 42);

        assert_eq!(cached[..], direct[..]);
    }
}
