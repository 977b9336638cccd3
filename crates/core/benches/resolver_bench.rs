//! Resolver benchmarks
//!
//! Compares a cached lookup with a full method table scan, for method tables
//! of growing size where the marked method is declared last.
//!
//! Run with: `cargo bench --bench resolver_bench -p entityforge-core`

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use entityforge_common::cache::{
    CacheInsert, CacheLookup, CacheProvider, MemoryCache, MemoryCacheConfig, MemoryCacheProvider,
    ReadCache,
};
use entityforge_common::error::{CommonError, CommonResult};
use entityforge_core::{
    CacheKey, CachedFactoryMethodResolver, DeclaredMethod, FactoryMethodRef,
    FactoryMethodResolver, TypeDescriptor,
};
use entityforge_domain::FactoryMarker;

struct Entity;

/// Cache that never stores anything, so every lookup scans
struct NoCache;

impl ReadCache<CacheKey, FactoryMethodRef> for NoCache {
    fn get(&self, _key: &CacheKey) -> CacheLookup<FactoryMethodRef> {
        CacheLookup::Miss
    }
}

impl CacheProvider<CacheKey, FactoryMethodRef> for NoCache {
    fn insert(&self, _key: CacheKey, value: FactoryMethodRef) -> CacheInsert<FactoryMethodRef> {
        CacheInsert::Stored(value)
    }

    fn insert_with_ttl(
        &self,
        _key: CacheKey,
        _value: FactoryMethodRef,
        _ttl: Duration,
    ) -> CommonResult<CacheInsert<FactoryMethodRef>> {
        Err(CommonError::unsupported("insert_with_ttl"))
    }

    fn insert_until(
        &self,
        _key: CacheKey,
        _value: FactoryMethodRef,
        _absolute_expiration: SystemTime,
    ) -> CommonResult<CacheInsert<FactoryMethodRef>> {
        Err(CommonError::unsupported("insert_until"))
    }

    fn remove(&self, _key: &CacheKey) -> CommonResult<Option<FactoryMethodRef>> {
        Err(CommonError::unsupported("remove"))
    }
}

fn entity_with_methods(count: usize) -> TypeDescriptor {
    (0..count)
        .fold(TypeDescriptor::builder::<Entity>(), |builder, i| {
            builder.method(DeclaredMethod::associated(format!("helper_{i}"), |_: ()| Entity))
        })
        .method(DeclaredMethod::associated("create", |_: ()| Entity).marked(FactoryMarker::new()))
        .build()
}

fn bench_get_factory_method(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_factory_method");

    for methods in [4_usize, 32, 256] {
        let target = entity_with_methods(methods);

        group.bench_with_input(BenchmarkId::new("cached", methods), &target, |b, target| {
            let cache: MemoryCache<CacheKey, FactoryMethodRef> =
                MemoryCache::new(MemoryCacheConfig::default());
            let provider = MemoryCacheProvider::new(cache);
            let resolver = CachedFactoryMethodResolver::new(Arc::new(provider));
            let _ = resolver.get_factory_method(target);
            b.iter(|| black_box(resolver.get_factory_method(black_box(target))));
        });

        group.bench_with_input(BenchmarkId::new("scan", methods), &target, |b, target| {
            let resolver = CachedFactoryMethodResolver::new(Arc::new(NoCache));
            b.iter(|| black_box(resolver.get_factory_method(black_box(target))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_get_factory_method);
criterion_main!(benches);
