//! # EntityForge Core
//!
//! Factory method resolution for domain entities whose constructors are not
//! public.
//!
//! This crate contains:
//! - The type registry types declare their method tables in
//! - The cache-backed factory method resolver and its port trait
//! - The generic `DomainFactory`
//! - The configuration loader and the composition root
//!
//! ## Architecture Principles
//! - Depends on `entityforge-common` for caching and `entityforge-domain`
//!   for types
//! - Fully synchronous; the only thread is the optional expiration sweeper
//! - Collaborators are injected through traits and checked at construction

pub mod bootstrap;
pub mod config;
pub mod error_ext;
pub mod factory;
pub mod registry;
pub mod resolver;

// Re-export specific items to avoid ambiguity
pub use bootstrap::{add_domain_factory, add_domain_factory_with_registry, DomainFactoryServices};
pub use error_ext::CommonErrorExt;
pub use factory::DomainFactory;
pub use registry::{
    DeclaredMethod, FactoryMethodRef, FactoryTarget, InvocationError, TypeDescriptor, TypeRegistry,
};
pub use resolver::{
    CacheKey, CachedFactoryMethodResolver, FactoryMethodResolver, ResolverStats,
};
