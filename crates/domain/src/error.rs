//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while parsing or building domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A scope reference could not be parsed.
    #[error("invalid scope: {0} (expected All, Environment/<permalink> or DeployGroup/<permalink>)")]
    InvalidScope(String),
}
