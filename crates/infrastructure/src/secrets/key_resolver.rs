//! Secret key expansion against an in-memory secret map.

use std::collections::BTreeMap;

use async_trait::async_trait;
use stratum_application::ports::{SecretBackendError, SecretSession};
use stratum_domain::{DeployTarget, SecretId};
use tracing::trace;

/// Resolves secret keys for one deploy target.
///
/// A short key is tried under every candidate id of the target, most specific
/// first. A full four-part id is looked up as-is. Keys that could not be read
/// are remembered until [`SecretSession::verify`].
#[derive(Debug)]
pub struct KeyResolver<'a> {
    secrets: &'a BTreeMap<String, String>,
    target: DeployTarget,
    missing: Vec<String>,
}

impl<'a> KeyResolver<'a> {
    /// Creates a resolver over `secrets` for `target`.
    #[must_use]
    pub const fn new(secrets: &'a BTreeMap<String, String>, target: DeployTarget) -> Self {
        Self {
            secrets,
            target,
            missing: Vec::new(),
        }
    }

    /// Returns the first existing id `key` expands to.
    fn lookup(&self, key: &str) -> Option<String> {
        if let Some(id) = SecretId::parse(key) {
            let id = id.to_string();
            return self.secrets.contains_key(&id).then_some(id);
        }

        SecretId::candidates(&self.target, key)
            .iter()
            .map(ToString::to_string)
            .inspect(|id| trace!(key, id = %id, "trying secret id"))
            .find(|id| self.secrets.contains_key(id))
    }
}

#[async_trait]
impl SecretSession for KeyResolver<'_> {
    async fn expand_key(&mut self, key: &str) -> Option<String> {
        self.lookup(key)
    }

    async fn read(&mut self, key: &str) -> Result<Option<String>, SecretBackendError> {
        let value = self
            .lookup(key)
            .and_then(|id| self.secrets.get(&id).cloned());

        if value.is_none() {
            self.missing.push(key.to_string());
        }
        Ok(value)
    }

    fn verify(&self) -> Result<(), SecretBackendError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(SecretBackendError::Missing(self.missing.clone()))
        }
    }
}
