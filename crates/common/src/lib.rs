//! Shared infrastructure for EntityForge crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: error types and classification
//! - `runtime`: expiring memory cache, cache provider contract, expiration
//!   sweeper, clock abstraction
//! - `observability`: tracing events (pulled in by `runtime`)
//! - `test-utils`: test doubles for downstream crates

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod error;

// Runtime tier
// --------------------------------------------------------------------
#[cfg(feature = "runtime")]
pub mod cache;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(feature = "runtime")]
pub mod testing;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "runtime")]
pub use cache::{
    CacheInsert, CacheItem, CacheLookup, CacheProvider, CacheStats, Expiration,
    ExpirationSweeper, MemoryCache, MemoryCacheConfig, MemoryCacheProvider, ReadCache, Rejection,
};
#[cfg(feature = "foundation")]
pub use error::{CommonError, CommonResult, ErrorClassification, ErrorSeverity};
#[cfg(feature = "runtime")]
pub use testing::time::{Clock, MockClock, SystemClock};
