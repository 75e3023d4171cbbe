//! Deploy targets
//!
//! A deploy target is a project deployed to (optionally) one deploy group.

use serde::{Deserialize, Serialize};

/// An environment such as staging or production.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// URL-safe identifier.
    pub permalink: String,
    /// Display name.
    pub name: String,
    /// Whether this is a production environment.
    #[serde(default)]
    pub production: bool,
}

impl Environment {
    /// Creates a non-production environment.
    #[must_use]
    pub fn new(permalink: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            permalink: permalink.into(),
            name: name.into(),
            production: false,
        }
    }
}

/// A set of hosts that receive the same deploy, belonging to one environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployGroup {
    /// URL-safe identifier.
    pub permalink: String,
    /// Display name.
    pub name: String,
    /// The environment this group belongs to.
    pub environment: Environment,
}

impl DeployGroup {
    /// Creates a deploy group.
    #[must_use]
    pub fn new(
        permalink: impl Into<String>,
        name: impl Into<String>,
        environment: Environment,
    ) -> Self {
        Self {
            permalink: permalink.into(),
            name: name.into(),
            environment,
        }
    }
}

/// What a resolution is computed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployTarget {
    /// Permalink of the deployed project.
    pub project: String,
    /// Deploy group, or `None` when only unscoped declarations apply.
    pub deploy_group: Option<DeployGroup>,
}

impl DeployTarget {
    /// Creates a target for a project deployed to a deploy group.
    #[must_use]
    pub fn new(project: impl Into<String>, deploy_group: DeployGroup) -> Self {
        Self {
            project: project.into(),
            deploy_group: Some(deploy_group),
        }
    }

    /// Creates a target without a deploy group.
    #[must_use]
    pub fn unscoped(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            deploy_group: None,
        }
    }

    /// Returns the environment of the deploy group, if any.
    #[must_use]
    pub fn environment(&self) -> Option<&Environment> {
        self.deploy_group.as_ref().map(|group| &group.environment)
    }
}
