//! Configuration loader
//!
//! Loads factory configuration from files and environment variables.
//!
//! ## Loading Strategy
//! 1. Start from defaults, or from the file named by `ENTITYFORGE_CONFIG`
//! 2. Apply overrides from environment variables that are set
//!
//! Every setting has a default, so an empty environment is valid.
//!
//! ## Environment Variables
//! - `ENTITYFORGE_CONFIG`: Path to a JSON or TOML config file
//! - `ENTITYFORGE_CACHE_SCAN_FREQUENCY_SECS`: Seconds between expiration scans
//! - `ENTITYFORGE_CACHE_TRACK_METRICS`: Whether cache statistics are recorded
//!   (true/false)
//! - `ENTITYFORGE_CACHE_SWEEPER_ENABLED`: Whether a background sweeper runs
//!   (true/false)
//! - `ENTITYFORGE_RESOLUTION_POLICY`: `first_match` or `reject_ambiguous`

use std::path::Path;

use entityforge_domain::constants::{
    ENV_CACHE_SCAN_FREQUENCY_SECS, ENV_CACHE_SWEEPER_ENABLED, ENV_CACHE_TRACK_METRICS,
    ENV_CONFIG_PATH, ENV_RESOLUTION_POLICY,
};
use entityforge_domain::{EntityForgeError, FactoryConfig, ResolutionPolicy, Result};

/// Load configuration from the optional config file plus environment
///
/// # Errors
/// Returns `EntityForgeError::Config` if:
/// - `ENTITYFORGE_CONFIG` names a missing or malformed file
/// - An override variable has an invalid value
pub fn load() -> Result<FactoryConfig> {
    let base = match std::env::var(ENV_CONFIG_PATH) {
        Ok(path) if !path.trim().is_empty() => load_from_file(path.trim())?,
        _ => FactoryConfig::default(),
    };

    let config = apply_env_overrides(base)?;
    tracing::info!(
        scan_frequency_secs = config.cache.expiration_scan_frequency_secs,
        sweeper_enabled = config.cache.sweeper_enabled,
        policy = %config.resolver.policy,
        "Factory configuration loaded"
    );
    Ok(config)
}

/// Load configuration from environment variables over defaults
///
/// # Errors
/// Returns `EntityForgeError::Config` if a variable has an invalid value.
pub fn load_from_env() -> Result<FactoryConfig> {
    apply_env_overrides(FactoryConfig::default())
}

/// Load configuration from a file
///
/// Supports JSON and TOML (detected by file extension). Missing fields take
/// their defaults.
///
/// # Errors
/// Returns `EntityForgeError::Config` if the file is missing, unreadable or
/// malformed.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<FactoryConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(EntityForgeError::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    tracing::info!(path = %path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| EntityForgeError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, path)
}

/// Parse configuration from string content
///
/// Format is detected by the extension of `path` (`.json` or `.toml`);
/// paths without an extension are read as JSON.
///
/// # Errors
/// Returns `EntityForgeError::Config` if the format is unsupported or parsing
/// fails.
pub fn parse_config(contents: &str, path: &Path) -> Result<FactoryConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| EntityForgeError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| EntityForgeError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(EntityForgeError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Apply environment overrides on top of `config`
///
/// Unset variables leave the corresponding field untouched.
///
/// # Errors
/// Returns `EntityForgeError::Config` if a set variable cannot be parsed.
pub fn apply_env_overrides(mut config: FactoryConfig) -> Result<FactoryConfig> {
    if let Some(value) = env_var(ENV_CACHE_SCAN_FREQUENCY_SECS) {
        config.cache.expiration_scan_frequency_secs = value.parse::<u64>().map_err(|e| {
            EntityForgeError::Config(format!("Invalid expiration scan frequency: {}", e))
        })?;
    }

    config.cache.track_metrics = env_bool(ENV_CACHE_TRACK_METRICS, config.cache.track_metrics);
    config.cache.sweeper_enabled =
        env_bool(ENV_CACHE_SWEEPER_ENABLED, config.cache.sweeper_enabled);

    if let Some(value) = env_var(ENV_RESOLUTION_POLICY) {
        config.resolver.policy = value.parse::<ResolutionPolicy>()?;
    }

    Ok(config)
}

/// Get an environment variable if it is set to a non-blank value
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
///
/// # Returns
/// The parsed boolean value, or `default` if not set.
fn env_bool(key: &str, default: bool) -> bool {
    env_var(key)
        .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    const ALL_VARS: [&str; 5] = [
        ENV_CONFIG_PATH,
        ENV_CACHE_SCAN_FREQUENCY_SECS,
        ENV_CACHE_TRACK_METRICS,
        ENV_CACHE_SWEEPER_ENABLED,
        ENV_RESOLUTION_POLICY,
    ];

    fn clear_env() {
        for key in ALL_VARS {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_env_bool_parsing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        for value in ["1", "true", "yes", "on", "TRUE"] {
            std::env::set_var("ENTITYFORGE_TEST_BOOL", value);
            assert!(env_bool("ENTITYFORGE_TEST_BOOL", false), "{value} should be true");
        }
        for value in ["0", "false", "no", "off"] {
            std::env::set_var("ENTITYFORGE_TEST_BOOL", value);
            assert!(!env_bool("ENTITYFORGE_TEST_BOOL", true), "{value} should be false");
        }

        std::env::remove_var("ENTITYFORGE_TEST_BOOL");
        assert!(env_bool("ENTITYFORGE_TEST_BOOL", true));
        assert!(!env_bool("ENTITYFORGE_TEST_BOOL", false));
    }

    #[test]
    fn test_load_from_env_defaults_when_unset() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        assert_eq!(load_from_env().unwrap(), FactoryConfig::default());
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_CACHE_SCAN_FREQUENCY_SECS, "120");
        std::env::set_var(ENV_CACHE_TRACK_METRICS, "true");
        std::env::set_var(ENV_CACHE_SWEEPER_ENABLED, "off");
        std::env::set_var(ENV_RESOLUTION_POLICY, "reject_ambiguous");

        let config = load_from_env().unwrap();
        assert_eq!(config.cache.expiration_scan_frequency_secs, 120);
        assert!(config.cache.track_metrics);
        assert!(!config.cache.sweeper_enabled);
        assert_eq!(config.resolver.policy, ResolutionPolicy::RejectAmbiguous);

        clear_env();
    }

    #[test]
    fn test_load_from_env_invalid_values() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_CACHE_SCAN_FREQUENCY_SECS, "hourly");
        assert!(matches!(load_from_env(), Err(EntityForgeError::Config(_))));
        std::env::remove_var(ENV_CACHE_SCAN_FREQUENCY_SECS);

        std::env::set_var(ENV_RESOLUTION_POLICY, "last_match");
        assert!(matches!(load_from_env(), Err(EntityForgeError::Config(_))));

        clear_env();
    }

    #[test]
    fn test_load_reads_file_then_env_overrides() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[cache]\nexpiration_scan_frequency_secs = 30\ntrack_metrics = true\n\n[resolver]\npolicy = \"reject_ambiguous\""
        )
        .unwrap();

        std::env::set_var(ENV_CONFIG_PATH, file.path());
        std::env::set_var(ENV_RESOLUTION_POLICY, "first_match");

        let config = load().unwrap();
        assert_eq!(config.cache.expiration_scan_frequency_secs, 30);
        assert!(config.cache.track_metrics);
        assert_eq!(config.resolver.policy, ResolutionPolicy::FirstMatch);

        clear_env();
    }

    #[test]
    fn test_load_from_file_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"cache": {{"sweeper_enabled": false}}}}"#).unwrap();

        let config = load_from_file(file.path()).unwrap();
        assert!(!config.cache.sweeper_enabled);
        assert_eq!(config.cache.expiration_scan_frequency_secs, 3600);
    }

    #[test]
    fn test_load_from_file_missing() {
        let err = load_from_file("/nonexistent/entityforge.toml").unwrap_err();
        assert!(matches!(err, EntityForgeError::Config(message) if message.contains("not found")));
    }

    #[test]
    fn test_parse_config_rejects_unknown_extension() {
        let file = NamedTempFile::new().unwrap();
        let err = parse_config("", &file.path().with_extension("yaml")).unwrap_err();
        assert_eq!(err, EntityForgeError::Config("Unsupported config format: yaml".into()));
    }

    #[test]
    fn test_parse_config_reports_invalid_toml() {
        let err = parse_config("[cache", Path::new("config.toml")).unwrap_err();
        assert!(matches!(err, EntityForgeError::Config(message) if message.starts_with("Invalid TOML")));
    }
}
