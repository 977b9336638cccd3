//! Factory method resolution
//!
//! [`FactoryMethodResolver`] is the port consumers depend on.
//! [`CachedFactoryMethodResolver`] implements it over any
//! [`CacheProvider`](entityforge_common::cache::CacheProvider) keyed by
//! [`CacheKey`].

mod cached;
mod key;
mod stats;

pub use cached::{
    CachedFactoryMethodResolver, CachedFactoryMethodResolverBuilder, FactoryMethodCache,
};
pub use key::CacheKey;
pub use stats::ResolverStats;

use entityforge_domain::Result;

use crate::registry::{FactoryMethodRef, TypeDescriptor};

/// Finds the factory method of a type
pub trait FactoryMethodResolver: Send + Sync {
    /// The type's factory method, or `None` when it declares none
    ///
    /// # Errors
    /// Implementations may fail when several methods qualify and their
    /// policy rejects ambiguity.
    fn get_factory_method(&self, target: &TypeDescriptor) -> Result<Option<FactoryMethodRef>>;
}
