//! Bounded, concurrent cache of parsed queries.
//!
//! Keys are derived from the input with [`cache_key`], so inputs that differ
//! only in case or whitespace share an entry. When the cache is full, a
//! quarter of its entries are dropped in hash-map iteration order before the
//! new one is inserted. This approximates LRU eviction without tracking
//! access order.

use std::sync::Arc;

use ahash::{AHashMap, RandomState};
use parking_lot::RwLock;

use crate::pipeline::ParsedQuery;

// Fixed seeds keep keys stable across processes.
const KEY_SEEDS: (u64, u64, u64, u64) = (
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
);

/// Cache key for `input`: a decimal hash of the lower-cased, trimmed input
/// with internal whitespace runs collapsed.
pub fn cache_key(input: &str) -> String {
    let canonical = input
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let (k0, k1, k2, k3) = KEY_SEEDS;
    RandomState::with_seeds(k0, k1, k2, k3)
        .hash_one(canonical.as_str())
        .to_string()
}

/// Thread-safe query cache.
#[derive(Debug)]
pub struct QueryCache {
    entries: RwLock<AHashMap<String, Arc<ParsedQuery>>>,
    capacity: usize,
}

impl QueryCache {
    /// Create a cache holding at most `capacity` entries. A capacity of zero
    /// disables caching.
    pub fn new(capacity: usize) -> Self {
        QueryCache {
            entries: RwLock::new(AHashMap::with_capacity(capacity.min(1024))),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_enabled(&self) -> bool {
        self.capacity > 0
    }

    pub fn get(&self, key: &str) -> Option<Arc<ParsedQuery>> {
        self.entries.read().get(key).cloned()
    }

    /// Insert `value`, evicting `max(1, capacity / 4)` entries first when the
    /// cache is full.
    pub fn put(&self, key: String, value: Arc<ParsedQuery>) {
        if !self.is_enabled() {
            return;
        }

        let mut entries = self.entries.write();
        if entries.len() >= self.capacity && !entries.contains_key(&key) {
            let evict = (self.capacity / 4).max(1);
            let victims: Vec<String> = entries.keys().take(evict).cloned().collect();
            for victim in victims {
                entries.remove(&victim);
            }
        }
        entries.insert(key, value);
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entities;
    use crate::intent::Intent;

    fn query(input: &str) -> Arc<ParsedQuery> {
        Arc::new(ParsedQuery::new(
            Intent::GeneralInquiry,
            0.1,
            Entities::new(),
            input,
            input,
        ))
    }

    #[test]
    fn test_key_normalization() {
        assert_eq!(cache_key("Contract 999999"), cache_key("contract   999999  "));
        assert_eq!(cache_key("  HELLO"), cache_key("hello"));
        assert_ne!(cache_key("contract 1"), cache_key("contract 2"));
        assert!(cache_key("x").parse::<u64>().is_ok());
    }

    #[test]
    fn test_get_put() {
        let cache = QueryCache::new(10);
        assert!(cache.get("a").is_none());
        cache.put("a".to_string(), query("a"));
        assert_eq!(cache.get("a").unwrap().original_input, "a");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_eviction_keeps_bound() {
        let cache = QueryCache::new(8);
        for i in 0..8 {
            cache.put(i.to_string(), query("q"));
        }
        assert_eq!(cache.len(), 8);

        cache.put("new".to_string(), query("new"));
        // 2 evicted, 1 inserted
        assert_eq!(cache.len(), 7);
        assert!(cache.get("new").is_some());

        for i in 0..100 {
            cache.put(format!("k{i}"), query("q"));
            assert!(cache.len() <= 8);
        }
    }

    #[test]
    fn test_small_capacity_evicts_at_least_one() {
        let cache = QueryCache::new(1);
        cache.put("a".to_string(), query("a"));
        cache.put("b".to_string(), query("b"));
        assert_eq!(cache.len(), 1);
        assert!(cache.get("b").is_some());
    }

    #[test]
    fn test_zero_capacity_disables_cache() {
        let cache = QueryCache::new(0);
        cache.put("a".to_string(), query("a"));
        assert!(cache.is_empty());
        assert!(!cache.is_enabled());
        assert_eq!(cache.capacity(), 0);
        assert_eq!(QueryCache::new(16).capacity(), 16);
    }

    #[test]
    fn test_clear() {
        let cache = QueryCache::new(4);
        cache.put("a".to_string(), query("a"));
        cache.clear();
        assert!(cache.is_empty());
    }
}
