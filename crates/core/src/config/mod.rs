//! Configuration loading
//!
//! The configuration types live in `entityforge-domain`; this module reads
//! them from files and the environment.

pub mod loader;

pub use loader::{apply_env_overrides, load, load_from_env, load_from_file, parse_config};
