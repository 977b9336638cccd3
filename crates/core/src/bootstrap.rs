//! Composition root
//!
//! Wires memory cache -> cache provider -> resolver -> registry from a
//! [`FactoryConfig`] and owns the lifecycle of what it starts.

use std::sync::Arc;

use entityforge_common::cache::{
    ExpirationSweeper, MemoryCache, MemoryCacheConfig, MemoryCacheProvider,
};
use entityforge_domain::constants::FACTORY_METHOD_CACHE_NAME;
use entityforge_domain::{EntityForgeError, FactoryConfig, Result};
use tracing::info;

use crate::error_ext::CommonErrorExt;
use crate::factory::DomainFactory;
use crate::registry::{FactoryMethodRef, FactoryTarget, TypeRegistry};
use crate::resolver::{CacheKey, CachedFactoryMethodResolver, FactoryMethodResolver};

/// Memory cache holding resolved factory methods
pub type FactoryMethodMemoryCache = MemoryCache<CacheKey, FactoryMethodRef>;

/// Everything `add_domain_factory` wires together
///
/// Dropping the services stops the sweeper; [`shutdown`](Self::shutdown)
/// does the same and reports failures.
#[derive(Debug)]
pub struct DomainFactoryServices {
    registry: Arc<TypeRegistry>,
    resolver: Arc<CachedFactoryMethodResolver>,
    cache: FactoryMethodMemoryCache,
    sweeper: Option<ExpirationSweeper>,
}

/// Build the factory services with a fresh type registry
///
/// # Errors
/// - `Config` when the scan frequency is zero
/// - `Internal` when the sweeper thread cannot be started
pub fn add_domain_factory(config: &FactoryConfig) -> Result<DomainFactoryServices> {
    add_domain_factory_with_registry(config, Arc::new(TypeRegistry::new()))
}

/// Build the factory services around an existing registry
///
/// # Errors
/// See [`add_domain_factory`].
pub fn add_domain_factory_with_registry(
    config: &FactoryConfig,
    registry: Arc<TypeRegistry>,
) -> Result<DomainFactoryServices> {
    let frequency = config.cache.expiration_scan_frequency();
    if frequency.is_zero() {
        return Err(EntityForgeError::Config(
            "expiration_scan_frequency_secs must be greater than zero".to_string(),
        ));
    }

    let cache_config = MemoryCacheConfig::builder()
        .name(FACTORY_METHOD_CACHE_NAME)
        .expiration_scan_frequency(frequency)
        .track_metrics(config.cache.track_metrics)
        .build();
    let cache: FactoryMethodMemoryCache = MemoryCache::new(cache_config);

    let provider = MemoryCacheProvider::builder()
        .memory_cache(cache.clone())
        .build()
        .map_err(CommonErrorExt::into_domain)?;

    let resolver = CachedFactoryMethodResolver::builder()
        .cache_provider(Arc::new(provider))
        .policy(config.resolver.policy)
        .build()?;

    let sweeper = if config.cache.sweeper_enabled {
        Some(ExpirationSweeper::spawn(cache.clone()).map_err(CommonErrorExt::into_domain)?)
    } else {
        None
    };

    info!(
        cache = FACTORY_METHOD_CACHE_NAME,
        scan_frequency_secs = frequency.as_secs(),
        sweeper = sweeper.is_some(),
        policy = %config.resolver.policy,
        "Domain factory services ready"
    );

    Ok(DomainFactoryServices { registry, resolver: Arc::new(resolver), cache, sweeper })
}

impl DomainFactoryServices {
    /// Factory for `T`, sharing this root's resolver and registry
    pub fn factory<T: FactoryTarget>(&self) -> DomainFactory<T> {
        DomainFactory::new(self.resolver(), Arc::clone(&self.registry))
    }

    /// Resolver as its port
    pub fn resolver(&self) -> Arc<dyn FactoryMethodResolver> {
        Arc::clone(&self.resolver) as Arc<dyn FactoryMethodResolver>
    }

    /// Concrete resolver, for its statistics and policy
    pub fn cached_resolver(&self) -> &Arc<CachedFactoryMethodResolver> {
        &self.resolver
    }

    /// Registry shared by every factory
    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    /// The memory cache behind the resolver
    pub fn cache(&self) -> &FactoryMethodMemoryCache {
        &self.cache
    }

    /// Whether the background sweeper thread is alive
    pub fn sweeper_running(&self) -> bool {
        self.sweeper.as_ref().is_some_and(ExpirationSweeper::is_running)
    }

    /// Stop the sweeper, if one was started
    ///
    /// # Errors
    /// Returns `Internal` if the sweeper thread panicked.
    pub fn shutdown(mut self) -> Result<()> {
        if let Some(sweeper) = self.sweeper.take() {
            sweeper.shutdown().map_err(CommonErrorExt::into_domain)?;
        }
        info!(cache = FACTORY_METHOD_CACHE_NAME, "Domain factory services stopped");
        Ok(())
    }
}
