//! Stratum Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer.

pub mod adapters;
pub mod persistence;
pub mod secrets;
pub mod serialization;

pub use adapters::StandardScopeRanker;
pub use persistence::{
    FileVariableStore, Manifest, SettingsError, SettingsRepository, TokioFileSystem,
};
pub use secrets::{FileSecretBackend, KeyResolver};
pub use serialization::{
    DocumentFormat, SerializationError, from_document_bytes, from_json_bytes, to_json_stable,
};
