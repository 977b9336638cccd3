//! Integration tests for the error module
//!
//! Checks that crate-specific errors can compose with `CommonError` the way
//! the module documentation describes.

#![cfg(feature = "foundation")]

use entityforge_common::error::{CommonError, ErrorClassification, ErrorSeverity};
use thiserror::Error;

#[derive(Debug, Error)]
enum RegistryError {
    #[error("type already registered: {0}")]
    Duplicate(String),

    #[error(transparent)]
    Common(#[from] CommonError),
}

impl ErrorClassification for RegistryError {
    fn is_retryable(&self) -> bool {
        match self {
            Self::Duplicate(_) => false,
            Self::Common(e) => e.is_retryable(),
        }
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Duplicate(_) => ErrorSeverity::Warning,
            Self::Common(e) => e.severity(),
        }
    }

    fn is_critical(&self) -> bool {
        match self {
            Self::Duplicate(_) => false,
            Self::Common(e) => e.is_critical(),
        }
    }
}

fn build_provider(has_cache: bool) -> Result<(), RegistryError> {
    if has_cache {
        Ok(())
    } else {
        Err(CommonError::missing_collaborator("memory cache").into())
    }
}

#[test]
fn test_common_error_converts_into_composed_error() {
    let err = build_provider(false).unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Common(CommonError::MissingCollaborator { collaborator: "memory cache" })
    ));
    assert_eq!(err.to_string(), "Missing required collaborator: memory cache");
    assert_eq!(err.severity(), ErrorSeverity::Error);
    assert!(build_provider(true).is_ok());
}

#[test]
fn test_composed_classification_delegates() {
    let internal: RegistryError = CommonError::internal("poisoned").into();
    assert!(internal.is_critical());
    assert_eq!(internal.severity(), ErrorSeverity::Critical);

    let duplicate = RegistryError::Duplicate("Widget".into());
    assert!(!duplicate.is_retryable());
    assert_eq!(duplicate.severity(), ErrorSeverity::Warning);
}

#[test]
fn test_unsupported_is_distinguishable() {
    let err = CommonError::unsupported("remove");
    assert!(err.is_unsupported());
    assert_ne!(err, CommonError::missing_collaborator("remove"));
}

#[test]
fn test_composed_error_propagates_through_anyhow() -> anyhow::Result<()> {
    build_provider(true)?;

    let err = anyhow::Error::from(build_provider(false).unwrap_err());
    assert!(err.downcast_ref::<RegistryError>().is_some());
    Ok(())
}
