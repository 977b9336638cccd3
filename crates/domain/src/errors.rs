//! Error types used throughout EntityForge

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for EntityForge
///
/// A type without a factory method is not an error for the resolver (it
/// returns `None`); `NotFound` is raised by consumers that require one.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum EntityForgeError {
    #[error("Factory method not found: {0}")]
    NotFound(String),

    #[error("Ambiguous factory method for {type_name}: {candidates:?}")]
    AmbiguousFactoryMethod { type_name: String, candidates: Vec<String> },

    #[error("Factory method invocation failed: {0}")]
    Invocation(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for EntityForge operations
pub type Result<T> = std::result::Result<T, EntityForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            EntityForgeError::NotFound("Widget".into()).to_string(),
            "Factory method not found: Widget"
        );
        assert_eq!(
            EntityForgeError::AmbiguousFactoryMethod {
                type_name: "Widget".into(),
                candidates: vec!["create".into(), "build".into()],
            }
            .to_string(),
            "Ambiguous factory method for Widget: [\"create\", \"build\"]"
        );
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_string(&EntityForgeError::Config("bad".into())).unwrap();
        assert_eq!(json, r#"{"type":"Config","message":"bad"}"#);

        let back: EntityForgeError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, EntityForgeError::Config("bad".into()));
    }
}
