//! # EntityForge Domain
//!
//! Domain types shared by the factory method resolver and its consumers.
//!
//! This crate contains:
//! - Type identity (`TypeName`) and method metadata (`MethodKind`,
//!   `MethodVisibility`)
//! - The factory method marker (`FactoryMarker`)
//! - Configuration structures with serde defaults
//! - The domain error type and Result alias
//!
//! ## Architecture
//! - No dependencies on other EntityForge crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
