//! Generic cache abstraction with expiring in-memory storage
//!
//! The module is layered:
//!
//! - [`MemoryCache`]: thread-safe expiring key/value store with a
//!   configurable expiration scan frequency
//! - [`CacheProvider`] / [`ReadCache`]: the contract consumers depend on,
//!   with explicit [`CacheLookup`] and [`CacheInsert`] outcomes instead of
//!   sentinel values
//! - [`MemoryCacheProvider`]: the contract implemented over a `MemoryCache`
//! - [`ExpirationSweeper`]: background thread evicting stale entries on a
//!   fixed interval
//!
//! # Examples
//!
//! ## Provider round-trip
//! ```
//! use entityforge_common::cache::{
//!     CacheLookup, CacheProvider, MemoryCache, MemoryCacheConfig, MemoryCacheProvider,
//!     ReadCache,
//! };
//!
//! let provider: MemoryCacheProvider<String, String> =
//!     MemoryCacheProvider::new(MemoryCache::new(MemoryCacheConfig::default()));
//!
//! let _ = provider.insert("Widget.FactoryMethod".to_string(), "create".to_string());
//! assert_eq!(
//!     provider.get(&"Widget.FactoryMethod".to_string()),
//!     CacheLookup::Hit("create".to_string())
//! );
//! assert_eq!(provider.get(&"Gadget.FactoryMethod".to_string()), CacheLookup::Miss);
//! ```
//!
//! ## Blank input is rejected, not stored
//! ```
//! use entityforge_common::cache::{
//!     CacheInsert, CacheProvider, MemoryCache, MemoryCacheConfig, MemoryCacheProvider,
//!     Rejection,
//! };
//!
//! let provider: MemoryCacheProvider<String, String> =
//!     MemoryCacheProvider::new(MemoryCache::new(MemoryCacheConfig::default()));
//!
//! assert_eq!(
//!     provider.insert(String::new(), "value".to_string()),
//!     CacheInsert::Rejected(Rejection::EmptyKey)
//! );
//! assert!(provider.memory_cache().is_empty());
//! ```
//!
//! # Thread Safety
//!
//! `MemoryCache` guards its entries with a `parking_lot::RwLock`; clones share
//! storage and can be handed to other threads (including the sweeper).

mod config;
mod core;
mod item;
mod provider;
mod stats;
mod sweeper;

// Re-export public API
pub use core::{Expiration, MemoryCache};

pub use config::{MemoryCacheConfig, MemoryCacheConfigBuilder, DEFAULT_EXPIRATION_SCAN_FREQUENCY};
pub use item::CacheItem;
pub use provider::{
    CacheInsert, CacheLookup, CacheProvider, MemoryCacheProvider, MemoryCacheProviderBuilder,
    ReadCache, Rejection,
};
pub use stats::CacheStats;
pub use sweeper::ExpirationSweeper;
