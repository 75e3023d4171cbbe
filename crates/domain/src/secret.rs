//! Secret references and secret ids
//!
//! A variable whose value starts with [`SECRET_MARKER`] does not hold the value
//! itself but a key into the secret store. Keys are expanded into full secret
//! ids of the form `environment/project/deploy_group/key`.

use std::fmt;

use crate::deploy::DeployTarget;

/// Prefix marking a value as a secret reference.
pub const SECRET_MARKER: &str = "secret://";

/// Suffix appended to a secret reference that could not be expanded in preview.
pub const FAILED_LOOKUP_MARK: &str = " X";

/// Wildcard id part matching any environment, project or deploy group.
pub const GLOBAL_PART: &str = "global";

/// Returns the secret key when `value` is a secret reference.
#[must_use]
pub fn secret_key(value: &str) -> Option<&str> {
    value.strip_prefix(SECRET_MARKER)
}

/// Returns true when `value` is a secret reference.
#[must_use]
pub fn is_secret_reference(value: &str) -> bool {
    value.starts_with(SECRET_MARKER)
}

/// A fully qualified secret id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SecretId {
    /// Environment permalink or `global`.
    pub environment: String,
    /// Project permalink or `global`.
    pub project: String,
    /// Deploy group permalink or `global`.
    pub deploy_group: String,
    /// Key within the scope.
    pub key: String,
}

impl SecretId {
    /// Parses a full id `environment/project/deploy_group/key`.
    ///
    /// Everything after the third `/` is the key, so keys may contain `/`.
    /// Returns `None` when there are fewer than four parts or any part is empty.
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        let parts: Vec<&str> = id.splitn(4, '/').collect();
        let [environment, project, deploy_group, key] = parts.as_slice() else {
            return None;
        };
        if parts.iter().any(|part| part.is_empty()) {
            return None;
        }

        Some(Self {
            environment: (*environment).to_string(),
            project: (*project).to_string(),
            deploy_group: (*deploy_group).to_string(),
            key: (*key).to_string(),
        })
    }

    /// Lists the ids a short `key` may live under for `target`, most specific first.
    ///
    /// Project-specific ids come before shared ones; within each, deploy group
    /// beats environment beats global. Combinations needing a deploy group are
    /// skipped when the target has none.
    #[must_use]
    pub fn candidates(target: &DeployTarget, key: &str) -> Vec<Self> {
        let deploy_group = target.deploy_group.as_ref();
        let environment = target.environment();
        let mut ids = Vec::new();

        for project in [target.project.as_str(), GLOBAL_PART] {
            if let (Some(environment), Some(group)) = (environment, deploy_group) {
                ids.push(Self::new(&environment.permalink, project, &group.permalink, key));
            }
            if let Some(environment) = environment {
                ids.push(Self::new(&environment.permalink, project, GLOBAL_PART, key));
            }
            ids.push(Self::new(GLOBAL_PART, project, GLOBAL_PART, key));
        }

        ids.dedup();
        ids
    }

    fn new(environment: &str, project: &str, deploy_group: &str, key: &str) -> Self {
        Self {
            environment: environment.to_string(),
            project: project.to_string(),
            deploy_group: deploy_group.to_string(),
            key: key.to_string(),
        }
    }
}

impl fmt::Display for SecretId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.environment, self.project, self.deploy_group, self.key
        )
    }
}
