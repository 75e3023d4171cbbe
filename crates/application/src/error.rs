//! Application error types

use thiserror::Error;

use crate::ports::{SecretBackendError, StoreError};

/// Errors surfaced by a resolution call.
///
/// Only commit-mode secret resolution and the collaborators can fail; collapsing
/// and interpolation never do.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// One or more secret keys could not be read. Lists every missing key of the batch.
    #[error("failed to resolve secret keys:\n\t{}", keys.join("\n\t"))]
    MissingSecrets {
        /// The unresolved keys, in request order.
        keys: Vec<String>,
    },

    /// The secret backend failed for another reason.
    #[error(transparent)]
    Backend(SecretBackendError),

    /// The variable store failed.
    #[error("variable store error: {0}")]
    Store(#[from] StoreError),
}

impl From<SecretBackendError> for ResolveError {
    fn from(error: SecretBackendError) -> Self {
        match error {
            SecretBackendError::Missing(keys) => Self::MissingSecrets { keys },
            other => Self::Backend(other),
        }
    }
}

/// Result type alias for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;
