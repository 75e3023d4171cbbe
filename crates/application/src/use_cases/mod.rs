//! Application use cases (business logic orchestration).

mod export_variables;
mod resolve_environment;

pub use export_variables::{ExportVariables, ExportVariablesOutput};
pub use resolve_environment::{ResolveEnvironment, ResolveEnvironmentOutput};

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use stratum_domain::{
        DeployGroup, Environment, Project, Scope, ScopeRef, VariableDeclaration, VariableGroup,
    };

    use crate::ports::{StoreError, VariableStore};

    /// Store holding project `api` with one variable group and deploy group `pod1`.
    pub struct MockStore {
        project: Project,
    }

    impl MockStore {
        pub fn new() -> Self {
            let mut project = Project::new("api", "API");
            project.groups.push(VariableGroup {
                id: "shared".to_string(),
                name: "Shared".to_string(),
                variables: Vec::new(),
            });
            Self { project }
        }

        pub fn with_project_var(mut self, name: &str, value: &str, scope: ScopeRef) -> Self {
            self.project
                .variables
                .push(VariableDeclaration::project("api", name, value, scope));
            self
        }

        pub fn with_group_var(mut self, name: &str, value: &str, scope: ScopeRef) -> Self {
            self.project.groups[0]
                .variables
                .push(VariableDeclaration::group("shared", name, value, scope));
            self
        }
    }

    #[async_trait]
    impl VariableStore for MockStore {
        async fn load_project(&self, permalink: &str) -> Result<Project, StoreError> {
            if permalink == self.project.permalink {
                Ok(self.project.clone())
            } else {
                Err(StoreError::NotFound(format!("project {permalink}")))
            }
        }

        async fn load_deploy_group(&self, permalink: &str) -> Result<DeployGroup, StoreError> {
            if permalink == "pod1" {
                Ok(DeployGroup::new(
                    "pod1",
                    "Pod 1",
                    Environment::new("production", "Production"),
                ))
            } else {
                Err(StoreError::NotFound(format!("deploy group {permalink}")))
            }
        }

        async fn scopes(&self) -> Result<Vec<Scope>, StoreError> {
            Ok(vec![
                Scope::all(),
                Scope::new("Production", ScopeRef::environment("production")),
                Scope::new("Pod 1", ScopeRef::deploy_group("pod1")),
            ])
        }
    }
}
