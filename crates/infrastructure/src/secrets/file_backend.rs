//! File-based secret backend.

use std::collections::BTreeMap;
use std::path::Path;

use stratum_application::ports::{FileSystem, SecretBackend, SecretBackendError, SecretSession};
use stratum_domain::{DeployTarget, SecretId};
use tracing::debug;

use super::KeyResolver;
use crate::serialization::{DocumentFormat, from_document_bytes};

/// Secret backend reading a flat map of full secret ids to values.
///
/// ```yaml
/// production/api/pod1/DB_PASS: hunter2
/// global/global/global/SENTRY_DSN: https://sentry.example
/// ```
#[derive(Debug, Clone, Default)]
pub struct FileSecretBackend {
    secrets: BTreeMap<String, String>,
}

impl FileSecretBackend {
    /// Creates a backend from already loaded secrets.
    #[must_use]
    pub const fn new(secrets: BTreeMap<String, String>) -> Self {
        Self { secrets }
    }

    /// Loads secrets from a JSON or YAML file.
    ///
    /// # Errors
    /// Returns `SecretBackendError::Unavailable` if the file cannot be read and
    /// `SecretBackendError::Malformed` if it does not parse or holds an id
    /// that is not `environment/project/deploy_group/key`.
    pub async fn load<F: FileSystem>(fs: &F, path: &Path) -> Result<Self, SecretBackendError> {
        let content = fs
            .read_file(path)
            .await
            .map_err(|e| SecretBackendError::Unavailable(e.to_string()))?;

        let secrets: BTreeMap<String, String> =
            from_document_bytes(DocumentFormat::from_path(path), &content)
                .map_err(|e| SecretBackendError::Malformed(e.to_string()))?;

        if let Some(id) = secrets.keys().find(|id| SecretId::parse(id).is_none()) {
            return Err(SecretBackendError::Malformed(format!(
                "invalid secret id '{id}'"
            )));
        }

        debug!(path = %path.display(), secrets = secrets.len(), "loaded secrets");
        Ok(Self::new(secrets))
    }
}

impl SecretBackend for FileSecretBackend {
    fn session(&self, target: &DeployTarget) -> Box<dyn SecretSession + '_> {
        Box::new(KeyResolver::new(&self.secrets, target.clone()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::persistence::TokioFileSystem;
    use pretty_assertions::assert_eq;
    use stratum_application::ResolveMode;
    use stratum_application::resolution::resolve_secrets;
    use stratum_domain::{DeployGroup, EffectiveMapping, Environment};
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_yaml_and_open_session() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("secrets.yaml");
        std::fs::write(&path, "global/api/global/TOKEN: abc\n").unwrap();

        let backend = FileSecretBackend::load(&TokioFileSystem::new(), &path)
            .await
            .unwrap();

        let mut session = backend.session(&DeployTarget::unscoped("api"));
        assert_eq!(session.read("TOKEN").await.unwrap().as_deref(), Some("abc"));
        assert!(session.verify().is_ok());
    }

    #[tokio::test]
    async fn test_key_with_slashes_resolves_in_both_modes() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("secrets.json");
        std::fs::write(&path, r#"{"production/api/pod1/db/pass": "hunter2"}"#).unwrap();
        let backend = FileSecretBackend::load(&TokioFileSystem::new(), &path)
            .await
            .unwrap();
        let target = DeployTarget::new(
            "api",
            DeployGroup::new("pod1", "Pod 1", Environment::new("production", "Production")),
        );

        let mut preview: EffectiveMapping =
            [("DB_PASS".to_string(), "secret://db/pass".to_string())].into();
        let mut commit = preview.clone();

        resolve_secrets(&mut preview, backend.session(&target).as_mut(), ResolveMode::Preview)
            .await
            .unwrap();
        resolve_secrets(&mut commit, backend.session(&target).as_mut(), ResolveMode::Commit)
            .await
            .unwrap();

        assert_eq!(preview["DB_PASS"], "secret://production/api/pod1/db/pass");
        assert_eq!(commit["DB_PASS"], "hunter2");
    }

    #[tokio::test]
    async fn test_sessions_do_not_share_missing_keys() {
        let backend = FileSecretBackend::default();
        let target = DeployTarget::unscoped("api");

        let mut first = backend.session(&target);
        assert_eq!(first.read("A").await.unwrap(), None);

        let second = backend.session(&target);
        assert!(second.verify().is_ok());
        assert!(first.verify().is_err());
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let dir = tempdir().expect("Failed to create temp directory");
        let result = FileSecretBackend::load(&TokioFileSystem::new(), &dir.path().join("x.json")).await;

        assert!(matches!(result, Err(SecretBackendError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_invalid_id_is_malformed() {
        let dir = tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("secrets.json");
        std::fs::write(&path, r#"{"DB_PASS": "x"}"#).unwrap();

        let result = FileSecretBackend::load(&TokioFileSystem::new(), &path).await;

        match result {
            Err(SecretBackendError::Malformed(message)) => assert!(message.contains("DB_PASS")),
            other => panic!("expected malformed error, got {other:?}"),
        }
    }
}
