//! User Settings Domain Model
//!
//! Defines where Stratum finds its inputs and how it prints results.

use serde::{Deserialize, Serialize};

/// Output format of the resolved environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `NAME="VALUE"` lines (default).
    #[default]
    Dotenv,
    /// Pretty-printed JSON object.
    Json,
}

/// User settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Path of the variable manifest (YAML or JSON).
    #[serde(default = "default_manifest")]
    pub manifest: String,

    /// Path of the secrets file (YAML or JSON).
    #[serde(default = "default_secrets")]
    pub secrets: String,

    /// Default output format for `resolve`.
    #[serde(default)]
    pub output: OutputFormat,
}

const fn default_schema_version() -> u32 {
    1
}

fn default_manifest() -> String {
    "stratum.yaml".to_string()
}

fn default_secrets() -> String {
    "secrets.json".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            manifest: default_manifest(),
            secrets: default_secrets(),
            output: OutputFormat::default(),
        }
    }
}
