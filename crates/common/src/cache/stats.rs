//! Cache statistics and metrics tracking

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Point-in-time statistics for a memory cache
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Current number of stored entries (expired but unswept included)
    pub size: usize,

    /// Reads that returned a live entry
    pub hits: u64,

    /// Reads that found nothing or an expired entry
    pub misses: u64,

    /// Successful writes
    pub inserts: u64,

    /// Entries removed explicitly
    pub removals: u64,

    /// Entries removed by an expiration scan
    pub expirations: u64,

    /// Reads or writes refused because the key or value was blank
    pub rejections: u64,
}

impl CacheStats {
    /// Calculate hit rate (hits / total accesses)
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_accesses();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Total number of read operations (hits + misses)
    pub fn total_accesses(&self) -> u64 {
        self.hits + self.misses
    }
}

#[derive(Debug, Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    inserts: AtomicU64,
    removals: AtomicU64,
    expirations: AtomicU64,
    rejections: AtomicU64,
}

/// Lock-free counters shared by every clone of a cache
#[derive(Debug, Clone, Default)]
pub(crate) struct MetricsCollector {
    counters: Arc<Counters>,
}

impl MetricsCollector {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_hit(&self) {
        self.counters.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.counters.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_insert(&self) {
        self.counters.inserts.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_removal(&self) {
        self.counters.removals.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_expirations(&self, count: u64) {
        self.counters.expirations.fetch_add(count, Ordering::Relaxed);
    }

    pub(crate) fn record_rejection(&self) {
        self.counters.rejections.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self, size: usize) -> CacheStats {
        let c = &self.counters;
        CacheStats {
            size,
            hits: c.hits.load(Ordering::Relaxed),
            misses: c.misses.load(Ordering::Relaxed),
            inserts: c.inserts.load(Ordering::Relaxed),
            removals: c.removals.load(Ordering::Relaxed),
            expirations: c.expirations.load(Ordering::Relaxed),
            rejections: c.rejections.load(Ordering::Relaxed),
        }
    }

    pub(crate) fn reset(&self) {
        let c = &self.counters;
        for counter in
            [&c.hits, &c.misses, &c.inserts, &c.removals, &c.expirations, &c.rejections]
        {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for cache::stats.
    use std::thread;

    use super::*;

    #[test]
    fn test_hit_rate_without_accesses_is_zero() {
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }

    #[test]
    fn test_hit_rate_calculation() {
        let stats = CacheStats { hits: 3, misses: 1, ..Default::default() };
        assert!((stats.hit_rate() - 0.75).abs() < 1e-10);
        assert_eq!(stats.total_accesses(), 4);
    }

    #[test]
    fn test_collector_snapshot_reflects_records() {
        let metrics = MetricsCollector::new();
        metrics.record_hit();
        metrics.record_miss();
        metrics.record_miss();
        metrics.record_insert();
        metrics.record_removal();
        metrics.record_expirations(4);
        metrics.record_rejection();

        let stats = metrics.snapshot(9);
        assert_eq!(
            stats,
            CacheStats {
                size: 9,
                hits: 1,
                misses: 2,
                inserts: 1,
                removals: 1,
                expirations: 4,
                rejections: 1,
            }
        );
    }

    #[test]
    fn test_collector_reset_zeroes_counters() {
        let metrics = MetricsCollector::new();
        metrics.record_hit();
        metrics.record_insert();
        metrics.reset();
        assert_eq!(metrics.snapshot(0), CacheStats::default());
    }

    #[test]
    fn test_clones_share_counters_across_threads() {
        let metrics = MetricsCollector::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let metrics = metrics.clone();
                thread::spawn(move || {
                    for _ in 0..250 {
                        metrics.record_hit();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(metrics.snapshot(0).hits, 1000);
    }
}
