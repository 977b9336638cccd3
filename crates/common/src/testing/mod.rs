//! Testing utilities and helpers
//!
//! - **[`mocks`]**: test doubles for the cache provider contract
//! - **[`time`]**: clock abstraction with a manually advanced mock clock
//!
//! `time` is also used by production code: the memory cache reads time
//! through [`Clock`] and defaults to [`SystemClock`].

pub mod mocks;
pub mod time;

pub use mocks::RecordingCacheProvider;
pub use time::{Clock, MockClock, SystemClock};
