//! Domain factory - thin consumer of the resolver

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use entityforge_domain::{EntityForgeError, Result};
use tracing::debug;

use crate::registry::{FactoryMethodRef, FactoryTarget, TypeRegistry};
use crate::resolver::FactoryMethodResolver;

/// Builds `T` by invoking its factory method
///
/// The method is looked up through the resolver on every call, so repeated
/// calls are served from the resolver's cache.
pub struct DomainFactory<T> {
    resolver: Arc<dyn FactoryMethodResolver>,
    registry: Arc<TypeRegistry>,
    _target: PhantomData<fn() -> T>,
}

impl<T: FactoryTarget> DomainFactory<T> {
    /// Factory over a shared resolver and registry
    pub fn new(resolver: Arc<dyn FactoryMethodResolver>, registry: Arc<TypeRegistry>) -> Self {
        Self { resolver, registry, _target: PhantomData }
    }

    /// The factory method of `T`, if it declares one
    ///
    /// # Errors
    /// Propagates resolver failures (for example an ambiguous declaration).
    pub fn factory_method(&self) -> Result<Option<FactoryMethodRef>> {
        let descriptor = self.registry.descriptor_of::<T>();
        self.resolver.get_factory_method(&descriptor)
    }

    /// Construct a `T` from `args`
    ///
    /// Several arguments are passed as a tuple matching the method's
    /// parameter.
    ///
    /// # Errors
    /// - `NotFound` when `T` declares no factory method
    /// - `Invocation` when `args` or the return type do not match the method
    pub fn create<A: 'static>(&self, args: A) -> Result<T> {
        let descriptor = self.registry.descriptor_of::<T>();
        let method = self
            .resolver
            .get_factory_method(&descriptor)?
            .ok_or_else(|| EntityForgeError::NotFound(descriptor.name().to_string()))?;

        debug!(type_name = %descriptor.name(), method = method.name(), "Invoking factory method");
        Ok(method.invoke::<A, T>(args)?)
    }
}

impl<T> Clone for DomainFactory<T> {
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
            registry: Arc::clone(&self.registry),
            _target: PhantomData,
        }
    }
}

impl<T> fmt::Debug for DomainFactory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainFactory")
            .field("target", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}
