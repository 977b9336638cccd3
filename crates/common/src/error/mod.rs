//! Common error types shared across EntityForge crates
//!
//! # Error Handling Architecture
//!
//! 1. **`CommonError`**: hard failures raised by shared infrastructure
//!    (unsupported cache operations, missing collaborators at construction,
//!    configuration and thread-spawn failures)
//!
//! 2. **`ErrorClassification` trait**: a standard interface for classifying
//!    errors by severity and retryability
//!
//! 3. **`ErrorSeverity` enum**: a unified severity level for logging
//!
//! Soft outcomes (cache misses, rejected blank keys) are not errors; they are
//! reported through [`crate::cache::CacheLookup`] and
//! [`crate::cache::CacheInsert`].
//!
//! ## Composition
//!
//! Crate-specific errors should wrap `CommonError` rather than duplicate its
//! variants:
//!
//! ```rust,ignore
//! #[derive(Debug, Error)]
//! pub enum RegistryError {
//!     #[error("type already registered: {0}")]
//!     Duplicate(String),
//!
//!     #[error(transparent)]
//!     Common(#[from] CommonError),
//! }
//! ```

use std::fmt;

use thiserror::Error;

/// Standard result type using CommonError
pub type CommonResult<T> = Result<T, CommonError>;

/// Common error variants raised by shared infrastructure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommonError {
    /// The operation is declared on a contract but not supported yet.
    ///
    /// Distinct from a cache miss: callers must never treat it as "absent".
    #[error("Operation '{operation}' is not supported yet")]
    Unsupported { operation: &'static str },

    /// A required collaborator was not supplied at construction time
    #[error("Missing required collaborator: {collaborator}")]
    MissingCollaborator { collaborator: &'static str },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Background worker could not be started or stopped cleanly
    #[error("Worker '{worker}' failed: {message}")]
    Worker { worker: String, message: String },

    /// Internal errors that shouldn't normally occur
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CommonError {
    /// Create an unsupported-operation error
    pub fn unsupported(operation: &'static str) -> Self {
        Self::Unsupported { operation }
    }

    /// Create a missing-collaborator error
    pub fn missing_collaborator(collaborator: &'static str) -> Self {
        Self::MissingCollaborator { collaborator }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into() }
    }

    /// Create a worker error
    pub fn worker<W: Into<String>, S: Into<String>>(worker: W, message: S) -> Self {
        Self::Worker { worker: worker.into(), message: message.into() }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal { message: message.into() }
    }

    /// Whether this error reports a contract operation that is not
    /// implemented yet
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

impl ErrorClassification for CommonError {
    fn is_retryable(&self) -> bool {
        matches!(self, Self::Worker { .. })
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Unsupported { .. } => ErrorSeverity::Warning,
            Self::MissingCollaborator { .. } | Self::Config { .. } | Self::Worker { .. } => {
                ErrorSeverity::Error
            }
            Self::Internal { .. } => ErrorSeverity::Critical,
        }
    }

    fn is_critical(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}

/// Standard interface for classifying errors
///
/// # Example
///
/// ```
/// use entityforge_common::error::{CommonError, ErrorClassification, ErrorSeverity};
///
/// let err = CommonError::unsupported("remove");
/// assert!(!err.is_retryable());
/// assert_eq!(err.severity(), ErrorSeverity::Warning);
/// ```
pub trait ErrorClassification {
    /// Whether retrying the same operation could succeed
    fn is_retryable(&self) -> bool;

    /// Severity for logging
    fn severity(&self) -> ErrorSeverity;

    /// Whether the error signals a broken invariant
    fn is_critical(&self) -> bool;
}

/// Unified severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorSeverity {
    /// Informational, expected conditions
    Info,
    /// Degraded but operational
    Warning,
    /// Failure requiring attention
    Error,
    /// System integrity at risk
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}
