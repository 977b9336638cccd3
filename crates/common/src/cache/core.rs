//! Expiring in-memory cache
//!
//! `MemoryCache` is the storage engine behind the cache provider contract.
//! Entries carry an optional expiry instant; reads never return an expired
//! entry, and expired entries are physically removed by an expiration scan
//! that runs at most once per configured scan frequency.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};

use parking_lot::{Mutex, RwLock};

use super::config::MemoryCacheConfig;
use super::stats::{CacheStats, MetricsCollector};
use crate::testing::time::{Clock, SystemClock};

/// Lifetime of a stored entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expiration {
    /// Lives until removed or the cache is cleared
    #[default]
    Never,
    /// Expires once the duration has elapsed after insertion
    After(Duration),
    /// Expires at a wall-clock point in time
    At(SystemTime),
}

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// Thread-safe expiring key/value store
///
/// Clones share storage, metrics and scan bookkeeping.
///
/// # Example
/// ```
/// use entityforge_common::cache::{MemoryCache, MemoryCacheConfig};
///
/// let cache: MemoryCache<String, i32> = MemoryCache::new(MemoryCacheConfig::default());
/// cache.set("answer".to_string(), 42);
/// assert_eq!(cache.try_get(&"answer".to_string()), Some(42));
/// ```
pub struct MemoryCache<K, V, C = SystemClock>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock,
{
    entries: Arc<RwLock<HashMap<K, CacheEntry<V>>>>,
    last_scan: Arc<Mutex<Instant>>,
    config: MemoryCacheConfig,
    metrics: MetricsCollector,
    clock: C,
}

impl<K, V> MemoryCache<K, V, SystemClock>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a new cache using the system clock
    pub fn new(config: MemoryCacheConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<K, V, C> MemoryCache<K, V, C>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock + Clone,
{
    /// Create a new cache with a custom clock (useful for testing)
    pub fn with_clock(config: MemoryCacheConfig, clock: C) -> Self {
        let now = clock.now();
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            last_scan: Arc::new(Mutex::new(now)),
            config,
            metrics: MetricsCollector::new(),
            clock,
        }
    }

    /// Configuration this cache was built with
    pub fn config(&self) -> &MemoryCacheConfig {
        &self.config
    }

    /// Store a value that never expires, overwriting any existing entry
    ///
    /// Returns the stored value.
    pub fn set(&self, key: K, value: V) -> V {
        self.set_with_expiration(key, value, Expiration::Never)
    }

    /// Store a value with an explicit lifetime, overwriting any existing entry
    pub fn set_with_expiration(&self, key: K, value: V, expiration: Expiration) -> V {
        let expires_at = self.expiry_instant(expiration);
        {
            let mut entries = self.entries.write();
            entries.insert(key, CacheEntry { value: value.clone(), expires_at });
        }

        if self.config.track_metrics {
            self.metrics.record_insert();
        }

        self.scan_if_due();
        value
    }

    /// Read a live value
    ///
    /// Pure read: access does not extend lifetimes and expired entries are
    /// left for the next scan.
    pub fn try_get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        let found = {
            let entries = self.entries.read();
            entries.get(key).filter(|entry| !entry.is_expired(now)).map(|entry| entry.value.clone())
        };

        if self.config.track_metrics {
            if found.is_some() {
                self.metrics.record_hit();
            } else {
                self.metrics.record_miss();
            }
        }
        found
    }

    /// Whether a live entry exists for `key`
    pub fn contains_key(&self, key: &K) -> bool {
        let now = self.clock.now();
        self.entries.read().get(key).is_some_and(|entry| !entry.is_expired(now))
    }

    /// Remove an entry, returning its value if it was still live
    pub fn remove(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        let removed = self.entries.write().remove(key)?;

        if self.config.track_metrics {
            self.metrics.record_removal();
        }
        (!removed.is_expired(now)).then_some(removed.value)
    }

    /// Remove all entries and reset metrics
    pub fn clear(&self) {
        self.entries.write().clear();
        self.metrics.reset();
    }

    /// Number of stored entries, including expired entries not yet swept
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every expired entry now
    ///
    /// Returns the number of entries removed.
    pub fn scan_expired(&self) -> usize {
        let now = self.clock.now();
        *self.last_scan.lock() = now;

        let removed = {
            let mut entries = self.entries.write();
            let before = entries.len();
            entries.retain(|_, entry| !entry.is_expired(now));
            before - entries.len()
        };

        if removed > 0 {
            if self.config.track_metrics {
                self.metrics.record_expirations(removed as u64);
            }
            tracing::debug!(cache = %self.config.name, removed, "Expired cache entries removed");
        }
        removed
    }

    /// Run an expiration scan if the scan frequency has elapsed since the
    /// previous one
    ///
    /// Returns the number of entries removed (zero when no scan ran).
    pub fn scan_if_due(&self) -> usize {
        let now = self.clock.now();
        let due = {
            let last_scan = self.last_scan.lock();
            now.duration_since(*last_scan) >= self.config.expiration_scan_frequency
        };
        if due {
            self.scan_expired()
        } else {
            0
        }
    }

    /// Snapshot of cache statistics
    pub fn stats(&self) -> CacheStats {
        self.metrics.snapshot(self.len())
    }

    pub(crate) fn record_rejection(&self) {
        if self.config.track_metrics {
            self.metrics.record_rejection();
        }
    }

    fn expiry_instant(&self, expiration: Expiration) -> Option<Instant> {
        let now = self.clock.now();
        match expiration {
            Expiration::Never => None,
            // Deadlines past the representable range never expire
            Expiration::After(ttl) => now.checked_add(ttl),
            Expiration::At(deadline) => {
                let remaining =
                    deadline.duration_since(self.clock.system_time()).unwrap_or(Duration::ZERO);
                now.checked_add(remaining)
            }
        }
    }
}

impl<K, V, C> Clone for MemoryCache<K, V, C>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock + Clone,
{
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            last_scan: Arc::clone(&self.last_scan),
            config: self.config.clone(),
            metrics: self.metrics.clone(),
            clock: self.clock.clone(),
        }
    }
}

impl<K, V, C> std::fmt::Debug for MemoryCache<K, V, C>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCache")
            .field("name", &self.config.name)
            .field("len", &self.entries.read().len())
            .finish_non_exhaustive()
    }
}
