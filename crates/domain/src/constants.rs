//! Domain constants
//!
//! Centralized location for constants shared by the resolver, the cache
//! configuration and the configuration loader.

/// Suffix appended to a type's short name to form its factory method cache key
pub const FACTORY_METHOD_KEY_SUFFIX: &str = "FactoryMethod";

/// Default interval between expiration scans of the factory method cache
pub const DEFAULT_EXPIRATION_SCAN_FREQUENCY_SECS: u64 = 60 * 60;

/// Name given to the memory cache that stores resolved factory methods
pub const FACTORY_METHOD_CACHE_NAME: &str = "factory-methods";

// Environment variables read by the configuration loader
pub const ENV_CONFIG_PATH: &str = "ENTITYFORGE_CONFIG";
pub const ENV_CACHE_SCAN_FREQUENCY_SECS: &str = "ENTITYFORGE_CACHE_SCAN_FREQUENCY_SECS";
pub const ENV_CACHE_TRACK_METRICS: &str = "ENTITYFORGE_CACHE_TRACK_METRICS";
pub const ENV_CACHE_SWEEPER_ENABLED: &str = "ENTITYFORGE_CACHE_SWEEPER_ENABLED";
pub const ENV_RESOLUTION_POLICY: &str = "ENTITYFORGE_RESOLUTION_POLICY";
