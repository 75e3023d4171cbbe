//! Command line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use stratum_domain::OutputFormat;

/// Top-level arguments.
#[derive(Debug, Parser)]
#[command(
    name = "stratum",
    about = "Resolve scoped deploy environments",
    version
)]
pub struct Cli {
    /// Settings file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Variable manifest (YAML or JSON)
    #[arg(long, global = true, env = "STRATUM_MANIFEST", value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Secrets file (YAML or JSON)
    #[arg(long, global = true, env = "STRATUM_SECRETS", value_name = "PATH")]
    pub secrets: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the effective environment of a deploy target
    Resolve {
        #[command(flatten)]
        target: TargetArgs,

        /// Expand secret keys instead of reading their values
        #[arg(long)]
        preview: bool,

        /// Output format (defaults to the configured one)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// List the variables of a deploy target that hold secret references
    Secrets {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Print every declaration of a project, ordered by scope
    Export {
        /// Project permalink
        #[arg(short, long)]
        project: String,
    },
}

/// Selects a deploy target.
#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Project permalink
    #[arg(short, long)]
    pub project: String,

    /// Deploy group permalink; without it only unscoped variables apply
    #[arg(short, long)]
    pub deploy_group: Option<String>,
}

/// `--format` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// `NAME="VALUE"` lines
    Dotenv,
    /// JSON object
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Dotenv => Self::Dotenv,
            FormatArg::Json => Self::Json,
        }
    }
}
