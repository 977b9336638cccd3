//! Cache provider contract and its memory-backed implementation
//!
//! The provider is the only surface consumers see. Reads and untimed writes
//! guard against blank keys and values; time-bounded writes and removal are
//! declared for future use and report [`CommonError::Unsupported`].
//!
//! # Outcomes
//!
//! | Call | Outcome |
//! |------|---------|
//! | `get` with blank key | `CacheLookup::Rejected(Rejection::EmptyKey)` |
//! | `get` with no live entry | `CacheLookup::Miss` |
//! | `get` with live entry | `CacheLookup::Hit(value)` |
//! | `insert` with blank key or value | `CacheInsert::Rejected(..)`, nothing stored |
//! | `insert` otherwise | `CacheInsert::Stored(value)`, overwrites |
//! | `insert_with_ttl`, `insert_until`, `remove` | `Err(CommonError::Unsupported)` |

use std::hash::Hash;
use std::time::{Duration, SystemTime};

use super::core::MemoryCache;
use super::item::CacheItem;
use crate::error::{CommonError, CommonResult};
use crate::testing::time::{Clock, SystemClock};

/// Why the provider refused a key or value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The key's textual form is empty
    EmptyKey,
    /// The value's textual form is empty
    EmptyValue,
}

/// Result of a cache read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup<V> {
    /// A live entry exists
    Hit(V),
    /// No live entry; the caller should compute the value
    Miss,
    /// The key itself was refused; caching must not be attempted for it
    Rejected(Rejection),
}

impl<V> CacheLookup<V> {
    /// Whether the lookup found a value
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }

    /// Convert into an `Option`, folding misses and rejections into `None`
    pub fn into_option(self) -> Option<V> {
        match self {
            Self::Hit(value) => Some(value),
            Self::Miss | Self::Rejected(_) => None,
        }
    }
}

/// Result of an untimed cache write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheInsert<V> {
    /// The value was stored and is returned to the caller
    Stored(V),
    /// Nothing was stored
    Rejected(Rejection),
}

impl<V> CacheInsert<V> {
    /// Whether the value was stored
    pub fn is_stored(&self) -> bool {
        matches!(self, Self::Stored(_))
    }
}

/// Read-only view of a cache provider
pub trait ReadCache<K, V>: Send + Sync {
    /// Look up the value stored under `key`
    fn get(&self, key: &K) -> CacheLookup<V>;
}

/// Key/value cache contract consumed by the factory method resolver
pub trait CacheProvider<K, V>: ReadCache<K, V> {
    /// Store `value` under `key` without expiry
    fn insert(&self, key: K, value: V) -> CacheInsert<V>;

    /// Store `value` under `key` for `ttl`
    ///
    /// Declared for time-bounded caching; not supported yet.
    fn insert_with_ttl(&self, key: K, value: V, ttl: Duration) -> CommonResult<CacheInsert<V>>;

    /// Store `value` under `key` until `absolute_expiration`
    ///
    /// Declared for time-bounded caching; not supported yet.
    fn insert_until(
        &self,
        key: K,
        value: V,
        absolute_expiration: SystemTime,
    ) -> CommonResult<CacheInsert<V>>;

    /// Remove the entry stored under `key`
    ///
    /// Declared for invalidation; not supported yet.
    fn remove(&self, key: &K) -> CommonResult<Option<V>>;
}

/// Cache provider backed by a [`MemoryCache`]
///
/// # Example
/// ```
/// use entityforge_common::cache::{
///     CacheInsert, CacheLookup, CacheProvider, MemoryCache, MemoryCacheConfig,
///     MemoryCacheProvider, ReadCache,
/// };
///
/// let provider = MemoryCacheProvider::new(MemoryCache::new(MemoryCacheConfig::default()));
/// assert_eq!(provider.insert("k".to_string(), "v".to_string()), CacheInsert::Stored("v".to_string()));
/// assert_eq!(provider.get(&"k".to_string()), CacheLookup::Hit("v".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct MemoryCacheProvider<K, V, C = SystemClock>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock,
{
    cache: MemoryCache<K, V, C>,
}

impl<K, V, C> MemoryCacheProvider<K, V, C>
where
    K: Eq + Hash + Clone + CacheItem,
    V: Clone + CacheItem,
    C: Clock + Clone,
{
    /// Wrap an existing memory cache
    pub fn new(cache: MemoryCache<K, V, C>) -> Self {
        Self { cache }
    }

    /// Start a builder; `build` fails if no memory cache was supplied
    pub fn builder() -> MemoryCacheProviderBuilder<K, V, C> {
        MemoryCacheProviderBuilder { cache: None }
    }

    /// The underlying memory cache
    pub fn memory_cache(&self) -> &MemoryCache<K, V, C> {
        &self.cache
    }
}

impl<K, V, C> ReadCache<K, V> for MemoryCacheProvider<K, V, C>
where
    K: Eq + Hash + Clone + CacheItem + Send + Sync,
    V: Clone + CacheItem + Send + Sync,
    C: Clock + Clone,
{
    fn get(&self, key: &K) -> CacheLookup<V> {
        if key.is_blank() {
            self.cache.record_rejection();
            return CacheLookup::Rejected(Rejection::EmptyKey);
        }

        match self.cache.try_get(key) {
            // A stored blank value is reported the same as no value at all
            Some(value) if !value.is_blank() => CacheLookup::Hit(value),
            _ => CacheLookup::Miss,
        }
    }
}

impl<K, V, C> CacheProvider<K, V> for MemoryCacheProvider<K, V, C>
where
    K: Eq + Hash + Clone + CacheItem + Send + Sync,
    V: Clone + CacheItem + Send + Sync,
    C: Clock + Clone,
{
    fn insert(&self, key: K, value: V) -> CacheInsert<V> {
        let rejection = if key.is_blank() {
            Some(Rejection::EmptyKey)
        } else if value.is_blank() {
            Some(Rejection::EmptyValue)
        } else {
            None
        };

        if let Some(reason) = rejection {
            self.cache.record_rejection();
            tracing::warn!(cache = %self.cache.config().name, ?reason, "Cache insert rejected");
            return CacheInsert::Rejected(reason);
        }

        CacheInsert::Stored(self.cache.set(key, value))
    }

    fn insert_with_ttl(&self, _key: K, _value: V, _ttl: Duration) -> CommonResult<CacheInsert<V>> {
        Err(CommonError::unsupported("insert_with_ttl"))
    }

    fn insert_until(
        &self,
        _key: K,
        _value: V,
        _absolute_expiration: SystemTime,
    ) -> CommonResult<CacheInsert<V>> {
        Err(CommonError::unsupported("insert_until"))
    }

    fn remove(&self, _key: &K) -> CommonResult<Option<V>> {
        Err(CommonError::unsupported("remove"))
    }
}

/// Builder that enforces the memory cache collaborator at construction time
#[derive(Debug)]
pub struct MemoryCacheProviderBuilder<K, V, C = SystemClock>
where
    K: Eq + Hash + Clone,
    V: Clone,
    C: Clock,
{
    cache: Option<MemoryCache<K, V, C>>,
}

impl<K, V, C> MemoryCacheProviderBuilder<K, V, C>
where
    K: Eq + Hash + Clone + CacheItem,
    V: Clone + CacheItem,
    C: Clock + Clone,
{
    /// Supply the underlying memory cache
    pub fn memory_cache(mut self, cache: MemoryCache<K, V, C>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Build the provider
    ///
    /// # Errors
    /// Returns [`CommonError::MissingCollaborator`] when no memory cache was
    /// supplied.
    pub fn build(self) -> CommonResult<MemoryCacheProvider<K, V, C>> {
        let cache = self.cache.ok_or_else(|| CommonError::missing_collaborator("memory cache"))?;
        Ok(MemoryCacheProvider::new(cache))
    }
}
