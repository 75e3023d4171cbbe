//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the resolution core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod file_system;
mod scope_ranker;
mod secret_backend;
mod variable_store;

pub use file_system::{FileSystem, FileSystemError};
pub use scope_ranker::{Priority, ScopeRanker, UNRANKED};
pub use secret_backend::{SecretBackend, SecretBackendError, SecretSession};
pub use variable_store::{StoreError, VariableStore};
