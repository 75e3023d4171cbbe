//! Persistence implementations
//!
//! File-backed manifest store, user settings and the file system adapter.

mod file_system;
mod manifest;
mod manifest_store;
mod settings_repository;

pub use file_system::TokioFileSystem;
pub use manifest::{
    Manifest, ManifestDeployGroup, ManifestProject, ManifestVariable, ManifestVariableGroup,
};
pub use manifest_store::FileVariableStore;
pub use settings_repository::{SettingsError, SettingsRepository};
