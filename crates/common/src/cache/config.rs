//! Memory cache configuration types and builder
//!
//! The only tunable that matters for expiry is how often stale entries are
//! swept; per-entry lifetimes are chosen at insertion time.

use std::time::Duration;

/// Default interval between expiration scans (one hour)
pub const DEFAULT_EXPIRATION_SCAN_FREQUENCY: Duration = Duration::from_secs(60 * 60);

/// Configuration for [`super::MemoryCache`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryCacheConfig {
    /// Name used in log events and the sweeper thread name
    pub name: String,

    /// Minimum interval between two expiration scans
    pub expiration_scan_frequency: Duration,

    /// Whether to collect hit/miss/insert counters
    pub track_metrics: bool,
}

impl Default for MemoryCacheConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            expiration_scan_frequency: DEFAULT_EXPIRATION_SCAN_FREQUENCY,
            track_metrics: false,
        }
    }
}

impl MemoryCacheConfig {
    /// Create a new configuration builder
    pub fn builder() -> MemoryCacheConfigBuilder {
        MemoryCacheConfigBuilder::default()
    }

    /// Preset with a custom scan frequency
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    ///
    /// use entityforge_common::cache::MemoryCacheConfig;
    ///
    /// let config = MemoryCacheConfig::scanned_every(Duration::from_secs(60));
    /// assert_eq!(config.expiration_scan_frequency, Duration::from_secs(60));
    /// ```
    pub fn scanned_every(frequency: Duration) -> Self {
        Self { expiration_scan_frequency: frequency, ..Self::default() }
    }
}

/// Builder for MemoryCacheConfig with fluent API
#[derive(Debug, Default)]
pub struct MemoryCacheConfigBuilder {
    config: MemoryCacheConfig,
}

impl MemoryCacheConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cache name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Set the interval between expiration scans
    pub fn expiration_scan_frequency(mut self, frequency: Duration) -> Self {
        self.config.expiration_scan_frequency = frequency;
        self
    }

    /// Enable or disable metrics tracking
    pub fn track_metrics(mut self, enabled: bool) -> Self {
        self.config.track_metrics = enabled;
        self
    }

    /// Build the configuration
    pub fn build(self) -> MemoryCacheConfig {
        self.config
    }
}
