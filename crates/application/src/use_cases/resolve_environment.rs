//! Resolve environment use case

use std::collections::BTreeSet;

use stratum_domain::{DeployTarget, EffectiveMapping};
use tracing::debug;

use crate::error::ResolveResult;
use crate::ports::{ScopeRanker, SecretBackend, VariableStore};
use crate::resolution::{ResolveMode, collapse, interpolate, resolve_secrets, secret_names};

/// Output containing the effective environment of a deploy target.
#[derive(Debug, Clone)]
pub struct ResolveEnvironmentOutput {
    /// The target the environment was resolved for.
    pub target: DeployTarget,
    /// Final name → value mapping.
    pub variables: EffectiveMapping,
}

/// Computes the environment a project sees when deployed to a deploy group.
///
/// Every call recomputes from the store; nothing is cached.
pub struct ResolveEnvironment<S, R, B> {
    store: S,
    ranker: R,
    backend: B,
}

impl<S, R, B> ResolveEnvironment<S, R, B>
where
    S: VariableStore,
    R: ScopeRanker,
    B: SecretBackend,
{
    /// Creates a new `ResolveEnvironment` use case.
    pub const fn new(store: S, ranker: R, backend: B) -> Self {
        Self {
            store,
            ranker,
            backend,
        }
    }

    /// Executes the use case: collapse, interpolate, then resolve secrets.
    ///
    /// # Arguments
    /// * `project` - Project permalink
    /// * `deploy_group` - Deploy group permalink, `None` for unscoped resolution
    /// * `mode` - Preview (never fails on secrets) or commit
    ///
    /// # Errors
    /// Returns an error if the project or deploy group cannot be loaded, or in
    /// commit mode if any secret cannot be resolved.
    pub async fn execute(
        &self,
        project: &str,
        deploy_group: Option<&str>,
        mode: ResolveMode,
    ) -> ResolveResult<ResolveEnvironmentOutput> {
        let (target, mut variables) = self.interpolated(project, deploy_group).await?;

        let mut session = self.backend.session(&target);
        resolve_secrets(&mut variables, session.as_mut(), mode).await?;

        Ok(ResolveEnvironmentOutput { target, variables })
    }

    /// Names of the variables holding secret references for the target.
    ///
    /// Does not open a secret session.
    ///
    /// # Errors
    /// Returns an error if the project or deploy group cannot be loaded.
    pub async fn secret_variable_names(
        &self,
        project: &str,
        deploy_group: Option<&str>,
    ) -> ResolveResult<BTreeSet<String>> {
        let (_, variables) = self.interpolated(project, deploy_group).await?;
        Ok(secret_names(&variables))
    }

    async fn interpolated(
        &self,
        project: &str,
        deploy_group: Option<&str>,
    ) -> ResolveResult<(DeployTarget, EffectiveMapping)> {
        let declarations = self.store.nested_variables(project).await?;
        let target = match deploy_group {
            Some(permalink) => {
                DeployTarget::new(project, self.store.load_deploy_group(permalink).await?)
            }
            None => DeployTarget::unscoped(project),
        };
        debug!(project, deploy_group, "resolving environment");

        let mut variables = collapse(&declarations, &target, &self.ranker);
        interpolate(&mut variables);
        Ok((target, variables))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::error::ResolveError;
    use crate::ports::StoreError;
    use crate::resolution::test_support::{FakeBackend, FixedRanker};
    use crate::use_cases::test_support::MockStore;
    use pretty_assertions::assert_eq;
    use stratum_domain::ScopeRef;

    fn store() -> MockStore {
        MockStore::new()
            .with_project_var("HOST", "db.internal", ScopeRef::All)
            .with_project_var("URL", "postgres://${HOST}/$DB_NAME", ScopeRef::All)
            .with_group_var("DB_NAME", "app", ScopeRef::All)
            .with_group_var("DB_NAME", "app_prod", ScopeRef::environment("production"))
            .with_project_var("DB_PASS", "secret://db/pass", ScopeRef::deploy_group("pod1"))
            .with_project_var("STAGING_ONLY", "1", ScopeRef::environment("staging"))
    }

    #[tokio::test]
    async fn test_commit_resolves_full_pipeline() {
        let backend = FakeBackend::new().with_value("db/pass", "hunter2");
        let use_case = ResolveEnvironment::new(store(), FixedRanker::standard(), backend);

        let output = use_case
            .execute("api", Some("pod1"), ResolveMode::Commit)
            .await
            .unwrap();

        assert_eq!(output.target.project, "api");
        assert_eq!(output.variables["URL"], "postgres://db.internal/app_prod");
        assert_eq!(output.variables["DB_PASS"], "hunter2");
        assert!(!output.variables.contains_key("STAGING_ONLY"));
    }

    #[tokio::test]
    async fn test_commit_fails_on_missing_secret() {
        let use_case =
            ResolveEnvironment::new(store(), FixedRanker::standard(), FakeBackend::new());

        let result = use_case
            .execute("api", Some("pod1"), ResolveMode::Commit)
            .await;

        assert!(matches!(result, Err(ResolveError::MissingSecrets { .. })));
    }

    #[tokio::test]
    async fn test_preview_never_fails() {
        let use_case =
            ResolveEnvironment::new(store(), FixedRanker::standard(), FakeBackend::new());

        let output = use_case
            .execute("api", Some("pod1"), ResolveMode::Preview)
            .await
            .unwrap();

        assert_eq!(output.variables["DB_PASS"], "secret://db/pass X");
    }

    #[tokio::test]
    async fn test_secret_variable_names_skips_backend() {
        let backend = FakeBackend::new();
        let use_case = ResolveEnvironment::new(store(), FixedRanker::standard(), backend);

        let names = use_case
            .secret_variable_names("api", Some("pod1"))
            .await
            .unwrap();

        assert_eq!(names.into_iter().collect::<Vec<_>>(), vec!["DB_PASS"]);
        assert_eq!(use_case.backend.sessions(), 0);
    }

    #[tokio::test]
    async fn test_secret_names_match_interpolated_preview_input() {
        let store = MockStore::new()
            .with_project_var("PASS", "secret://pass", ScopeRef::All)
            .with_project_var("ALIAS", "$PASS", ScopeRef::All)
            .with_project_var("PLAIN", "value", ScopeRef::All);
        let use_case = ResolveEnvironment::new(store, FixedRanker::standard(), FakeBackend::new());

        let names = use_case
            .secret_variable_names("api", Some("pod1"))
            .await
            .unwrap();
        let preview = use_case
            .execute("api", Some("pod1"), ResolveMode::Preview)
            .await
            .unwrap();
        let flagged: BTreeSet<String> = preview
            .variables
            .iter()
            .filter(|(_, value)| value.starts_with(stratum_domain::SECRET_MARKER))
            .map(|(name, _)| name.clone())
            .collect();

        assert_eq!(names, flagged);
        assert_eq!(names.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_deploy_group() {
        let use_case =
            ResolveEnvironment::new(store(), FixedRanker::standard(), FakeBackend::new());

        let result = use_case
            .execute("api", Some("nope"), ResolveMode::Preview)
            .await;

        assert!(matches!(
            result,
            Err(ResolveError::Store(StoreError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_unknown_project() {
        let use_case =
            ResolveEnvironment::new(store(), FixedRanker::standard(), FakeBackend::new());

        let result = use_case.execute("web", None, ResolveMode::Preview).await;

        assert!(matches!(
            result,
            Err(ResolveError::Store(StoreError::NotFound(_)))
        ));
    }
}
