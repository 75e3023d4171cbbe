//! Variable manifest file format.
//!
//! ```yaml
//! environments:
//!   - permalink: production
//!     name: Production
//!     production: true
//! deploy_groups:
//!   - permalink: pod1
//!     name: Pod 1
//!     environment: production
//! variable_groups:
//!   - id: shared
//!     name: Shared
//!     variables:
//!       - name: DB_HOST
//!         value: db.internal
//!         scope: Environment/production
//! projects:
//!   - permalink: api
//!     name: API
//!     variable_groups: [shared]
//!     variables:
//!       - name: DB_PASS
//!         value: secret://DB_PASS
//! ```
//!
//! A variable without `scope` applies everywhere.

use serde::{Deserialize, Serialize};
use stratum_application::ports::StoreError;
use stratum_domain::{
    DeployGroup, Environment, Project, Scope, ScopeRef, VariableDeclaration, VariableGroup,
};

/// A variable as written in the manifest; the owner is implied by its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestVariable {
    /// Variable name.
    pub name: String,
    /// Raw value.
    pub value: String,
    /// Scope in text form, omitted for `All`.
    #[serde(default, skip_serializing_if = "ScopeRef::is_all")]
    pub scope: ScopeRef,
}

/// A deploy group referencing its environment by permalink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestDeployGroup {
    /// URL-safe identifier.
    pub permalink: String,
    /// Display name.
    pub name: String,
    /// Environment permalink.
    pub environment: String,
}

/// A variable group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestVariableGroup {
    /// Group identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Declarations owned by the group.
    #[serde(default)]
    pub variables: Vec<ManifestVariable>,
}

/// A project referencing its variable groups by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestProject {
    /// URL-safe identifier.
    pub permalink: String,
    /// Display name.
    pub name: String,
    /// Included variable groups, in inclusion order.
    #[serde(default)]
    pub variable_groups: Vec<String>,
    /// Declarations attached directly to the project.
    #[serde(default)]
    pub variables: Vec<ManifestVariable>,
}

/// The whole manifest document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Known environments.
    #[serde(default)]
    pub environments: Vec<Environment>,
    /// Known deploy groups.
    #[serde(default)]
    pub deploy_groups: Vec<ManifestDeployGroup>,
    /// Shared variable groups.
    #[serde(default)]
    pub variable_groups: Vec<ManifestVariableGroup>,
    /// Projects.
    #[serde(default)]
    pub projects: Vec<ManifestProject>,
}

impl Manifest {
    /// Builds a project with its own declarations and its included groups.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` for an unknown project and
    /// `StoreError::Invalid` when it includes an unknown variable group.
    pub fn project(&self, permalink: &str) -> Result<Project, StoreError> {
        let entry = self
            .projects
            .iter()
            .find(|project| project.permalink == permalink)
            .ok_or_else(|| StoreError::NotFound(format!("project '{permalink}'")))?;

        let groups = entry
            .variable_groups
            .iter()
            .map(|id| self.variable_group(id, permalink))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Project {
            permalink: entry.permalink.clone(),
            name: entry.name.clone(),
            variables: entry
                .variables
                .iter()
                .map(|v| {
                    VariableDeclaration::project(&entry.permalink, &v.name, &v.value, v.scope.clone())
                })
                .collect(),
            groups,
        })
    }

    /// Builds a deploy group with its environment.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` for an unknown deploy group and
    /// `StoreError::Invalid` when its environment is unknown.
    pub fn deploy_group(&self, permalink: &str) -> Result<DeployGroup, StoreError> {
        let entry = self
            .deploy_groups
            .iter()
            .find(|group| group.permalink == permalink)
            .ok_or_else(|| StoreError::NotFound(format!("deploy group '{permalink}'")))?;

        let environment = self
            .environments
            .iter()
            .find(|environment| environment.permalink == entry.environment)
            .ok_or_else(|| {
                StoreError::Invalid(format!(
                    "deploy group '{permalink}' references unknown environment '{}'",
                    entry.environment
                ))
            })?;

        Ok(DeployGroup::new(
            &entry.permalink,
            &entry.name,
            environment.clone(),
        ))
    }

    /// The scope catalog: `All`, then environments, then deploy groups, in file order.
    #[must_use]
    pub fn scopes(&self) -> Vec<Scope> {
        let environments = self
            .environments
            .iter()
            .map(|e| Scope::new(&e.name, ScopeRef::environment(&e.permalink)));
        let deploy_groups = self
            .deploy_groups
            .iter()
            .map(|g| Scope::new(&g.name, ScopeRef::deploy_group(&g.permalink)));

        std::iter::once(Scope::all())
            .chain(environments)
            .chain(deploy_groups)
            .collect()
    }

    fn variable_group(&self, id: &str, project: &str) -> Result<VariableGroup, StoreError> {
        let entry = self
            .variable_groups
            .iter()
            .find(|group| group.id == id)
            .ok_or_else(|| {
                StoreError::Invalid(format!(
                    "project '{project}' includes unknown variable group '{id}'"
                ))
            })?;

        Ok(VariableGroup {
            id: entry.id.clone(),
            name: entry.name.clone(),
            variables: entry
                .variables
                .iter()
                .map(|v| VariableDeclaration::group(&entry.id, &v.name, &v.value, v.scope.clone()))
                .collect(),
        })
    }
}
