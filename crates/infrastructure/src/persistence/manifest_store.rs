//! File-based variable store.
//!
//! Declarations, deploy groups and the scope catalog are read from a single
//! manifest file (see [`Manifest`]). The file is re-read on every call so a
//! resolution always reflects the current contents.

use std::path::PathBuf;

use async_trait::async_trait;
use stratum_application::ports::{FileSystem, StoreError, VariableStore};
use stratum_domain::{DeployGroup, Project, Scope};
use tracing::debug;

use super::manifest::Manifest;
use crate::serialization::{DocumentFormat, from_document_bytes};

/// Variable store backed by a JSON or YAML manifest.
#[derive(Debug, Clone)]
pub struct FileVariableStore<F> {
    fs: F,
    path: PathBuf,
}

impl<F: FileSystem> FileVariableStore<F> {
    /// Creates a store reading the manifest at `path`.
    pub fn new(fs: F, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }

    /// Reads and parses the manifest.
    ///
    /// # Errors
    /// Returns `StoreError::Io` when the file cannot be read and
    /// `StoreError::Serialization` when it does not parse.
    pub async fn manifest(&self) -> Result<Manifest, StoreError> {
        let content = self
            .fs
            .read_file(&self.path)
            .await
            .map_err(|e| StoreError::Io(e.into_io()))?;

        let manifest: Manifest =
            from_document_bytes(DocumentFormat::from_path(&self.path), &content)
                .map_err(|e| StoreError::Serialization(e.to_string()))?;

        debug!(
            path = %self.path.display(),
            projects = manifest.projects.len(),
            deploy_groups = manifest.deploy_groups.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }
}

#[async_trait]
impl<F: FileSystem + Sync> VariableStore for FileVariableStore<F> {
    async fn load_project(&self, permalink: &str) -> Result<Project, StoreError> {
        self.manifest().await?.project(permalink)
    }

    async fn load_deploy_group(&self, permalink: &str) -> Result<DeployGroup, StoreError> {
        self.manifest().await?.deploy_group(permalink)
    }

    async fn scopes(&self) -> Result<Vec<Scope>, StoreError> {
        Ok(self.manifest().await?.scopes())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::persistence::TokioFileSystem;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    const JSON: &str = r#"{
  "environments": [{"permalink": "staging", "name": "Staging"}],
  "deploy_groups": [{"permalink": "stage1", "name": "Stage 1", "environment": "staging"}],
  "projects": [
    {
      "permalink": "web",
      "name": "Web",
      "variables": [
        {"name": "PORT", "value": "80"},
        {"name": "PORT", "value": "8080", "scope": "DeployGroup/stage1"}
      ]
    }
  ]
}"#;

    #[tokio::test]
    async fn test_loads_json_manifest() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("stratum.json");
        std::fs::write(&path, JSON).unwrap();

        let store = FileVariableStore::new(TokioFileSystem::new(), &path);

        let declarations = store.nested_variables("web").await.unwrap();
        assert_eq!(declarations.len(), 2);
        assert_eq!(declarations[1].value, "8080");

        let group = store.load_deploy_group("stage1").await.unwrap();
        assert_eq!(group.environment.name, "Staging");
        assert!(!group.environment.production);

        let scopes = store.scopes().await.unwrap();
        assert_eq!(scopes.len(), 3);
    }

    #[tokio::test]
    async fn test_rereads_file_on_every_call() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("stratum.json");
        std::fs::write(&path, JSON).unwrap();
        let store = FileVariableStore::new(TokioFileSystem::new(), &path);

        assert!(store.load_project("web").await.is_ok());

        std::fs::write(&path, "{}").unwrap();
        assert!(matches!(
            store.load_project("web").await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_manifest_is_io_error() {
        let dir = tempdir().expect("Failed to create temp directory");
        let store = FileVariableStore::new(TokioFileSystem::new(), dir.path().join("none.yaml"));

        let err = store.load_project("web").await.unwrap_err();
        match err {
            StoreError::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_manifest() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("stratum.yaml");
        std::fs::write(&path, "projects: [unterminated").unwrap();
        let store = FileVariableStore::new(TokioFileSystem::new(), &path);

        assert!(matches!(
            store.scopes().await,
            Err(StoreError::Serialization(_))
        ));
    }
}
