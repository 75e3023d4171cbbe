//! Command execution.
//!
//! Every command returns the text to print so callers decide where it goes.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use stratum_application::ResolveMode;
use stratum_application::use_cases::{ExportVariables, ResolveEnvironment};
use stratum_domain::{EffectiveMapping, OutputFormat, Settings};
use stratum_infrastructure::{
    FileSecretBackend, FileVariableStore, SettingsRepository, StandardScopeRanker,
    TokioFileSystem, to_json_stable,
};
use tracing::{info, warn};

use crate::cli::{Cli, Command, TargetArgs};

/// Inputs and defaults after merging settings, environment and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Variable manifest path.
    pub manifest: PathBuf,
    /// Secrets file path.
    pub secrets: PathBuf,
    /// Default output format.
    pub output: OutputFormat,
}

impl Config {
    /// Builds the configuration for `cli`, reading the settings file if any.
    ///
    /// # Errors
    /// Returns an error if the settings file exists but cannot be loaded.
    pub async fn load(cli: &Cli) -> Result<Self> {
        let repository = cli
            .config
            .as_ref()
            .map_or_else(SettingsRepository::new, SettingsRepository::at);

        let settings = repository.load().await.with_context(|| {
            format!(
                "failed to load settings from {}",
                repository
                    .path()
                    .map_or_else(|| "<none>".to_string(), |p| p.display().to_string())
            )
        })?;

        Ok(Self::merge(settings, cli))
    }

    /// Applies command line values (which already include the environment) over `settings`.
    #[must_use]
    pub fn merge(settings: Settings, cli: &Cli) -> Self {
        Self {
            manifest: cli
                .manifest
                .clone()
                .unwrap_or_else(|| PathBuf::from(settings.manifest)),
            secrets: cli
                .secrets
                .clone()
                .unwrap_or_else(|| PathBuf::from(settings.secrets)),
            output: settings.output,
        }
    }

    fn store(&self) -> FileVariableStore<TokioFileSystem> {
        FileVariableStore::new(TokioFileSystem::new(), &self.manifest)
    }
}

/// Runs a parsed command line.
///
/// # Errors
/// Returns the first error of the command, with context.
pub async fn run(cli: Cli) -> Result<String> {
    let config = Config::load(&cli).await?;
    execute(cli.command, &config).await
}

/// Executes `command` with an already built configuration.
///
/// # Errors
/// Returns the first error of the command, with context.
pub async fn execute(command: Command, config: &Config) -> Result<String> {
    match command {
        Command::Resolve {
            target,
            preview,
            format,
        } => {
            let mode = ResolveMode::from_preview(preview);
            info!(project = %target.project, deploy_group = ?target.deploy_group, ?mode, "resolve");

            let backend = secret_backend(config, mode).await?;
            let use_case =
                ResolveEnvironment::new(config.store(), StandardScopeRanker::new(), backend);
            let output = use_case
                .execute(&target.project, target.deploy_group.as_deref(), mode)
                .await
                .with_context(|| describe("failed to resolve", &target))?;

            render(&output.variables, format.map_or(config.output, Into::into))
        }
        Command::Secrets { target } => {
            info!(project = %target.project, deploy_group = ?target.deploy_group, "secrets");

            let use_case = ResolveEnvironment::new(
                config.store(),
                StandardScopeRanker::new(),
                FileSecretBackend::default(),
            );
            let names = use_case
                .secret_variable_names(&target.project, target.deploy_group.as_deref())
                .await
                .with_context(|| describe("failed to list secrets of", &target))?;

            Ok(names.into_iter().map(|name| name + "\n").collect())
        }
        Command::Export { project } => {
            info!(%project, "export");

            let output = ExportVariables::new(config.store())
                .execute(&project)
                .await
                .with_context(|| format!("failed to export project '{project}'"))?;

            if output.count == 0 {
                Ok(String::new())
            } else {
                Ok(output.text + "\n")
            }
        }
    }
}

/// Renders a resolved environment.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render(variables: &EffectiveMapping, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Dotenv => Ok(variables
            .iter()
            .map(|(name, value)| format!("{name}={value:?}\n"))
            .collect()),
        OutputFormat::Json => Ok(to_json_stable(variables)?),
    }
}

async fn secret_backend(config: &Config, mode: ResolveMode) -> Result<FileSecretBackend> {
    match FileSecretBackend::load(&TokioFileSystem::new(), &config.secrets).await {
        Ok(backend) => Ok(backend),
        Err(e) if mode == ResolveMode::Preview => {
            warn!(path = %config.secrets.display(), error = %e, "secrets unavailable, previewing without them");
            Ok(FileSecretBackend::default())
        }
        Err(e) => Err(e).with_context(|| {
            format!("failed to load secrets from {}", config.secrets.display())
        }),
    }
}

fn describe(action: &str, target: &TargetArgs) -> String {
    match &target.deploy_group {
        Some(group) => format!("{action} '{}' on deploy group '{group}'", target.project),
        None => format!("{action} '{}'", target.project),
    }
}
