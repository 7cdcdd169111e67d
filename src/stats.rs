//! Usage statistics for the query parser.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use ahash::AHashMap;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::intent::Intent;

/// Snapshot of parser statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Queries received, including rejected ones and cache hits.
    pub total_queries: u64,
    pub cache_hits: u64,
    /// `cache_hits / total_queries`, or 0 before the first query.
    pub cache_hit_rate: f64,
    pub cache_size: usize,
    /// Number of model-backed linguistic capabilities.
    pub loaded_capability_count: usize,
    /// Average processing time in milliseconds per result intent, over
    /// queries that were not served from the cache.
    pub average_processing_times: BTreeMap<Intent, f64>,
}

#[derive(Debug, Clone, Copy, Default)]
struct IntentTiming {
    count: u64,
    total: Duration,
}

/// Collector for parser statistics. All methods take `&self`.
#[derive(Debug, Default)]
pub struct QueryStats {
    total_queries: AtomicU64,
    cache_hits: AtomicU64,
    timings: Mutex<AHashMap<Intent, IntentTiming>>,
}

impl QueryStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a received query and return the new total.
    pub fn record_query(&self) -> u64 {
        self.total_queries.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record how long a freshly processed query took.
    pub fn record_processing_time(&self, intent: Intent, elapsed: Duration) {
        let mut timings = self.timings.lock();
        let timing = timings.entry(intent).or_default();
        timing.count += 1;
        timing.total += elapsed;
    }

    pub fn total_queries(&self) -> u64 {
        self.total_queries.load(Ordering::Relaxed)
    }

    pub fn cache_hits(&self) -> u64 {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn cache_hit_rate(&self) -> f64 {
        let total = self.total_queries();
        if total == 0 {
            0.0
        } else {
            self.cache_hits() as f64 / total as f64
        }
    }

    pub fn average_processing_times(&self) -> BTreeMap<Intent, f64> {
        self.timings
            .lock()
            .iter()
            .map(|(intent, timing)| {
                let average = timing.total.as_secs_f64() * 1000.0 / timing.count.max(1) as f64;
                (*intent, average)
            })
            .collect()
    }

    /// Reset counters and timings.
    pub fn reset(&self) {
        self.total_queries.store(0, Ordering::Relaxed);
        self.cache_hits.store(0, Ordering::Relaxed);
        self.timings.lock().clear();
    }

    pub fn snapshot(&self, cache_size: usize, loaded_capability_count: usize) -> Statistics {
        Statistics {
            total_queries: self.total_queries(),
            cache_hits: self.cache_hits(),
            cache_hit_rate: self.cache_hit_rate(),
            cache_size,
            loaded_capability_count,
            average_processing_times: self.average_processing_times(),
        }
    }
}
