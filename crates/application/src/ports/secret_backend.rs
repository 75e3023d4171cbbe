//! Secret backend port
//!
//! Secret lookups happen inside a session scoped to one deploy target. The
//! session records every key it failed to read so that a single `verify`
//! call can report all of them at once.

use async_trait::async_trait;

use stratum_domain::DeployTarget;

/// Errors reported by a secret backend.
#[derive(Debug, thiserror::Error)]
pub enum SecretBackendError {
    /// Keys requested in this session that could not be read.
    #[error("failed to resolve secret keys:\n\t{}", .0.join("\n\t"))]
    Missing(Vec<String>),

    /// The backend could not be reached.
    #[error("secret backend unavailable: {0}")]
    Unavailable(String),

    /// The backend answered with something unusable.
    #[error("malformed secret backend response: {0}")]
    Malformed(String),
}

/// Factory for per-resolution secret sessions.
pub trait SecretBackend: Send + Sync {
    /// Opens a lookup session for `target`. The session is dropped when the
    /// resolution call ends.
    fn session(&self, target: &DeployTarget) -> Box<dyn SecretSession + '_>;
}

/// Secret lookups for a single deploy target.
#[async_trait]
pub trait SecretSession: Send {
    /// Expands `key` into the full path it resolves to, without reading the value.
    ///
    /// Returns `None` when no path holds the key. Never fails.
    async fn expand_key(&mut self, key: &str) -> Option<String>;

    /// Reads the value of `key`.
    ///
    /// A key that cannot be found yields `Ok(None)` and is remembered for
    /// [`SecretSession::verify`].
    ///
    /// # Errors
    /// Returns an error when the backend itself fails.
    async fn read(&mut self, key: &str) -> Result<Option<String>, SecretBackendError>;

    /// Checks that every key read in this session was found.
    ///
    /// # Errors
    /// Returns `SecretBackendError::Missing` listing all unresolved keys.
    fn verify(&self) -> Result<(), SecretBackendError>;
}
