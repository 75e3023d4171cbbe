//! Variable store port
//!
//! Defines the interface for loading declarations and deploy targets.

use async_trait::async_trait;

use stratum_domain::{DeployGroup, Project, Scope, VariableDeclaration};

/// Errors that can occur while loading from a variable store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A project, deploy group, environment or variable group does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The stored data is inconsistent.
    #[error("invalid data: {0}")]
    Invalid(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Source of raw variable declarations and deploy topology.
#[async_trait]
pub trait VariableStore: Send + Sync {
    /// Loads a project with its own declarations and included variable groups.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if the project doesn't exist.
    async fn load_project(&self, permalink: &str) -> Result<Project, StoreError>;

    /// Loads a deploy group together with its environment.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if the deploy group doesn't exist.
    async fn load_deploy_group(&self, permalink: &str) -> Result<DeployGroup, StoreError>;

    /// Returns the scope catalog: `All`, then environments, then deploy groups.
    async fn scopes(&self) -> Result<Vec<Scope>, StoreError>;

    /// Returns every declaration attached to a project, directly or via its groups.
    ///
    /// Own declarations first, then each group's in group order.
    async fn nested_variables(
        &self,
        project: &str,
    ) -> Result<Vec<VariableDeclaration>, StoreError> {
        Ok(self.load_project(project).await?.nested_variables())
    }
}
