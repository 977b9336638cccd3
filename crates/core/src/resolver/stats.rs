//! Resolver statistics

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Snapshot of resolver activity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResolverStats {
    /// Calls to `get_factory_method`
    pub lookups: u64,
    /// Lookups answered from the cache
    pub cache_hits: u64,
    /// Method table scans performed
    pub scans: u64,
    /// Scans that found no qualifying method
    pub not_found: u64,
}

impl ResolverStats {
    /// Fraction of lookups answered from the cache (0.0 when idle)
    pub fn hit_rate(&self) -> f64 {
        if self.lookups == 0 {
            0.0
        } else {
            self.cache_hits as f64 / self.lookups as f64
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ResolverCounters {
    lookups: AtomicU64,
    cache_hits: AtomicU64,
    scans: AtomicU64,
    not_found: AtomicU64,
}

impl ResolverCounters {
    pub(crate) fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_scan(&self) {
        self.scans.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> ResolverStats {
        ResolverStats {
            lookups: self.lookups.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            scans: self.scans.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
        }
    }
}
