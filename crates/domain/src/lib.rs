//! Stratum Domain - Core business types
//!
//! This crate defines the domain model for deploy environment resolution:
//! scoped variable declarations, deploy targets and secret references.
//! All types here are pure Rust with no I/O dependencies.

pub mod deploy;
pub mod error;
pub mod secret;
pub mod settings;
pub mod variable;

pub use deploy::{DeployGroup, DeployTarget, Environment};
pub use error::DomainError;
pub use secret::{FAILED_LOOKUP_MARK, GLOBAL_PART, SECRET_MARKER, SecretId};
pub use settings::{OutputFormat, Settings};
pub use variable::{
    EffectiveMapping, Owner, Project, Scope, ScopeRef, VariableDeclaration, VariableGroup,
};
