//! Cache-backed factory method resolver

use std::sync::Arc;

use entityforge_common::cache::{CacheInsert, CacheLookup, CacheProvider};
use entityforge_common::error::CommonError;
use entityforge_domain::{EntityForgeError, ResolutionPolicy, Result, TypeName};
use tracing::{debug, warn};

use super::key::CacheKey;
use super::stats::{ResolverCounters, ResolverStats};
use super::FactoryMethodResolver;
use crate::error_ext::CommonErrorExt;
use crate::registry::{DeclaredMethod, FactoryMethodRef, TypeDescriptor};

/// Cache provider the resolver stores methods in
pub type FactoryMethodCache = dyn CacheProvider<CacheKey, FactoryMethodRef>;

/// Resolves factory methods by scanning method tables, caching what it finds
///
/// Only positive results are cached, and cached entries are returned without
/// re-validation. Concurrent misses for one type may both scan and both
/// insert the same method.
pub struct CachedFactoryMethodResolver {
    cache: Arc<FactoryMethodCache>,
    policy: ResolutionPolicy,
    counters: ResolverCounters,
}

impl CachedFactoryMethodResolver {
    /// Resolver with the default first-match policy
    pub fn new(cache: Arc<FactoryMethodCache>) -> Self {
        Self { cache, policy: ResolutionPolicy::default(), counters: ResolverCounters::default() }
    }

    /// Start a builder; `build` fails if no cache provider was supplied
    pub fn builder() -> CachedFactoryMethodResolverBuilder {
        CachedFactoryMethodResolverBuilder::default()
    }

    /// Policy applied when several methods qualify
    pub fn policy(&self) -> ResolutionPolicy {
        self.policy
    }

    /// Snapshot of lookup statistics
    pub fn stats(&self) -> ResolverStats {
        self.counters.snapshot()
    }

    fn scan(&self, target: &TypeDescriptor) -> Result<Option<FactoryMethodRef>> {
        self.counters.record_scan();

        let mut candidates =
            target.declared_methods().filter(|method| qualifies(method, target.name()));
        let Some(first) = candidates.next() else {
            return Ok(None);
        };
        let others: Vec<&FactoryMethodRef> = candidates.collect();

        if !others.is_empty() {
            let names: Vec<String> = std::iter::once(first)
                .chain(others)
                .map(|method| method.name().to_string())
                .collect();

            match self.policy {
                ResolutionPolicy::FirstMatch => {
                    warn!(
                        type_name = %target.name(),
                        candidates = ?names,
                        selected = first.name(),
                        "Several factory methods qualify; using the first declared"
                    );
                }
                ResolutionPolicy::RejectAmbiguous => {
                    return Err(EntityForgeError::AmbiguousFactoryMethod {
                        type_name: target.name().to_string(),
                        candidates: names,
                    });
                }
            }
        }

        Ok(Some(Arc::clone(first)))
    }
}

/// Whether `method` is a factory method candidate for the type named `type_name`
///
/// Candidates are non-public, declared on the type itself and marked with a
/// marker that either has no qualifier or names `type_name` exactly.
fn qualifies(method: &DeclaredMethod, type_name: &TypeName) -> bool {
    if method.visibility().is_public() || method.is_inherited() {
        return false;
    }
    method.marker().is_some_and(|marker| marker.accepts(type_name))
}

impl FactoryMethodResolver for CachedFactoryMethodResolver {
    fn get_factory_method(&self, target: &TypeDescriptor) -> Result<Option<FactoryMethodRef>> {
        self.counters.record_lookup();
        let key = CacheKey::factory_method(target.name());

        match self.cache.get(&key) {
            CacheLookup::Hit(method) => {
                self.counters.record_hit();
                debug!(key = %key, method = method.name(), "Factory method cache hit");
                return Ok(Some(method));
            }
            CacheLookup::Miss => debug!(key = %key, "Factory method cache miss"),
            CacheLookup::Rejected(reason) => {
                debug!(key = %key, ?reason, "Cache key rejected; resolving without the cache");
            }
        }

        let Some(method) = self.scan(target)? else {
            self.counters.record_not_found();
            debug!(type_name = %target.name(), "No factory method declared");
            return Ok(None);
        };

        if let CacheInsert::Rejected(reason) = self.cache.insert(key, Arc::clone(&method)) {
            debug!(type_name = %target.name(), ?reason, "Resolved factory method was not cached");
        }

        Ok(Some(method))
    }
}

impl std::fmt::Debug for CachedFactoryMethodResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedFactoryMethodResolver")
            .field("policy", &self.policy)
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

/// Builder that enforces the cache provider collaborator at construction time
#[derive(Default)]
pub struct CachedFactoryMethodResolverBuilder {
    cache: Option<Arc<FactoryMethodCache>>,
    policy: ResolutionPolicy,
}

impl CachedFactoryMethodResolverBuilder {
    /// Cache provider resolved methods are stored in (required)
    pub fn cache_provider(mut self, cache: Arc<FactoryMethodCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Ambiguity policy; defaults to first match
    pub fn policy(mut self, policy: ResolutionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build the resolver
    ///
    /// # Errors
    /// Returns [`EntityForgeError::PreconditionViolation`] when no cache
    /// provider was supplied.
    pub fn build(self) -> Result<CachedFactoryMethodResolver> {
        let cache = self
            .cache
            .ok_or_else(|| CommonError::missing_collaborator("cache provider").into_domain())?;

        Ok(CachedFactoryMethodResolver {
            cache,
            policy: self.policy,
            counters: ResolverCounters::default(),
        })
    }
}
