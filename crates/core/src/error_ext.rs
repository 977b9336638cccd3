//! Mapping shared infrastructure errors into the domain error

use entityforge_common::error::CommonError;
use entityforge_domain::EntityForgeError;

/// Converts [`CommonError`] into [`EntityForgeError`]
///
/// Both types live in other crates, so this is an extension trait rather
/// than a `From` impl.
pub trait CommonErrorExt {
    fn into_domain(self) -> EntityForgeError;
}

impl CommonErrorExt for CommonError {
    fn into_domain(self) -> EntityForgeError {
        match self {
            CommonError::Unsupported { operation } => {
                EntityForgeError::Unsupported(operation.to_string())
            }
            err @ CommonError::MissingCollaborator { .. } => {
                EntityForgeError::PreconditionViolation(err.to_string())
            }
            CommonError::Config { message } => EntityForgeError::Config(message),
            err @ (CommonError::Worker { .. } | CommonError::Internal { .. }) => {
                EntityForgeError::Internal(err.to_string())
            }
        }
    }
}
