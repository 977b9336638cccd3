//! Shared test helpers for `entityforge-core` integration tests.
//!
//! Fixture entities declare their method tables the way application types
//! would, so tests can focus on resolution behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod entities;

use std::sync::Arc;

use entityforge_common::cache::{MemoryCache, MemoryCacheConfig, MemoryCacheProvider};
use entityforge_common::testing::RecordingCacheProvider;
use entityforge_core::{CacheKey, CachedFactoryMethodResolver, FactoryMethodRef};

/// Resolver over a real memory cache, returned with the cache for inspection
pub fn memory_backed_resolver() -> (CachedFactoryMethodResolver, MemoryCache<CacheKey, FactoryMethodRef>)
{
    let cache = MemoryCache::new(MemoryCacheConfig::builder().track_metrics(true).build());
    let provider = MemoryCacheProvider::new(cache.clone());
    (CachedFactoryMethodResolver::new(Arc::new(provider)), cache)
}

/// Resolver over a recording test double, returned with the double
pub fn recording_resolver(
    cache: RecordingCacheProvider<CacheKey, FactoryMethodRef>,
) -> CachedFactoryMethodResolver {
    CachedFactoryMethodResolver::new(Arc::new(cache))
}

/// Route library logs to the test writer; safe to call from every test
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
