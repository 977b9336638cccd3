//! Configuration management

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_EXPIRATION_SCAN_FREQUENCY_SECS;
use crate::impl_domain_str_conversions;

/// Factory configuration
///
/// Every field has a default, so partial files and empty documents are valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    pub cache: CacheSettings,
    pub resolver: ResolverSettings,
}

/// Factory method cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    /// Seconds between expiration scans (default: 3600)
    pub expiration_scan_frequency_secs: u64,
    pub track_metrics: bool,
    /// Run a background sweeper instead of relying on write-triggered scans
    pub sweeper_enabled: bool,
}

impl CacheSettings {
    /// Scan frequency as a `Duration`
    pub fn expiration_scan_frequency(&self) -> Duration {
        Duration::from_secs(self.expiration_scan_frequency_secs)
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            expiration_scan_frequency_secs: DEFAULT_EXPIRATION_SCAN_FREQUENCY_SECS,
            track_metrics: false,
            sweeper_enabled: true,
        }
    }
}

/// Resolver configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverSettings {
    pub policy: ResolutionPolicy,
}

/// What the resolver does when several methods on one type qualify
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPolicy {
    /// Take the first qualifying method in declaration order and log a warning
    #[default]
    FirstMatch,
    /// Fail with `AmbiguousFactoryMethod` and cache nothing
    RejectAmbiguous,
}

impl_domain_str_conversions!(ResolutionPolicy {
    FirstMatch => "first_match",
    RejectAmbiguous => "reject_ambiguous",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FactoryConfig::default();
        assert_eq!(config.cache.expiration_scan_frequency(), Duration::from_secs(3600));
        assert!(config.cache.sweeper_enabled);
        assert!(!config.cache.track_metrics);
        assert_eq!(config.resolver.policy, ResolutionPolicy::FirstMatch);
    }

    #[test]
    fn test_policy_parses_from_str() {
        assert_eq!(
            "reject_ambiguous".parse::<ResolutionPolicy>().unwrap(),
            ResolutionPolicy::RejectAmbiguous
        );
        assert!("strict".parse::<ResolutionPolicy>().is_err());
    }
}
