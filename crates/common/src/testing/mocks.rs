//! Test doubles for the cache provider contract

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use parking_lot::Mutex;

use crate::cache::{CacheInsert, CacheLookup, CacheProvider, ReadCache};
use crate::error::{CommonError, CommonResult};

/// Cache provider that records every call
///
/// Stores values in a plain map and counts `get`/`insert` calls so tests can
/// verify how a consumer used the cache. In "always miss" mode every read
/// reports [`CacheLookup::Miss`] regardless of what was inserted.
///
/// # Examples
///
/// ```
/// use entityforge_common::cache::{CacheProvider, ReadCache};
/// use entityforge_common::testing::mocks::RecordingCacheProvider;
///
/// let cache = RecordingCacheProvider::<String, u32>::always_miss();
/// let _ = cache.insert("k".to_string(), 1);
/// assert!(!cache.get(&"k".to_string()).is_hit());
/// assert_eq!(cache.insert_calls(), 1);
/// assert_eq!(cache.get_calls(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RecordingCacheProvider<K, V> {
    entries: Arc<Mutex<HashMap<K, V>>>,
    inserted_keys: Arc<Mutex<Vec<K>>>,
    get_calls: Arc<AtomicUsize>,
    insert_calls: Arc<AtomicUsize>,
    always_miss: bool,
}

impl<K, V> RecordingCacheProvider<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Provider that stores and returns values
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            inserted_keys: Arc::new(Mutex::new(Vec::new())),
            get_calls: Arc::new(AtomicUsize::new(0)),
            insert_calls: Arc::new(AtomicUsize::new(0)),
            always_miss: false,
        }
    }

    /// Provider whose reads always miss
    pub fn always_miss() -> Self {
        Self { always_miss: true, ..Self::new() }
    }

    /// Number of `get` calls so far
    #[must_use]
    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    /// Number of `insert` calls so far
    #[must_use]
    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    /// Keys passed to `insert`, in call order
    #[must_use]
    pub fn inserted_keys(&self) -> Vec<K> {
        self.inserted_keys.lock().clone()
    }

    /// Number of stored entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether nothing has been stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> Default for RecordingCacheProvider<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> ReadCache<K, V> for RecordingCacheProvider<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    fn get(&self, key: &K) -> CacheLookup<V> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        if self.always_miss {
            return CacheLookup::Miss;
        }
        self.entries.lock().get(key).cloned().map_or(CacheLookup::Miss, CacheLookup::Hit)
    }
}

impl<K, V> CacheProvider<K, V> for RecordingCacheProvider<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    fn insert(&self, key: K, value: V) -> CacheInsert<V> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        self.inserted_keys.lock().push(key.clone());
        self.entries.lock().insert(key, value.clone());
        CacheInsert::Stored(value)
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
