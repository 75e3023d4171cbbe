//! Scope references
//!
//! A scope decides where a declaration applies and how strongly it overrides
//! declarations of the same name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Where a variable declaration applies.
///
/// Text form: `All`, `Environment/<permalink>` or `DeployGroup/<permalink>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ScopeRef {
    /// Applies to every deploy target.
    #[default]
    All,
    /// Applies to every deploy group of an environment.
    Environment(String),
    /// Applies to a single deploy group.
    DeployGroup(String),
}

impl ScopeRef {
    /// Creates an environment scope.
    #[must_use]
    pub fn environment(permalink: impl Into<String>) -> Self {
        Self::Environment(permalink.into())
    }

    /// Creates a deploy group scope.
    #[must_use]
    pub fn deploy_group(permalink: impl Into<String>) -> Self {
        Self::DeployGroup(permalink.into())
    }

    /// Returns true for the unscoped ("applies everywhere") reference.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for ScopeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Environment(permalink) => write!(f, "Environment/{permalink}"),
            Self::DeployGroup(permalink) => write!(f, "DeployGroup/{permalink}"),
        }
    }
}

impl FromStr for ScopeRef {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "All" {
            return Ok(Self::All);
        }

        let invalid = || DomainError::InvalidScope(s.to_string());
        let (kind, permalink) = s.split_once('/').ok_or_else(invalid)?;
        if permalink.is_empty() || permalink.contains('/') {
            return Err(invalid());
        }

        match kind {
            "Environment" => Ok(Self::environment(permalink)),
            "DeployGroup" => Ok(Self::deploy_group(permalink)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for ScopeRef {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ScopeRef> for String {
    fn from(scope: ScopeRef) -> Self {
        scope.to_string()
    }
}

/// A named entry of the scope catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    /// Human-readable name (e.g. "Production", "Pod 1").
    pub name: String,
    /// The scope this entry names.
    pub reference: ScopeRef,
}

impl Scope {
    /// Creates a catalog entry.
    #[must_use]
    pub fn new(name: impl Into<String>, reference: ScopeRef) -> Self {
        Self {
            name: name.into(),
            reference,
        }
    }

    /// The catalog entry for unscoped declarations.
    #[must_use]
    pub fn all() -> Self {
        Self::new("All", ScopeRef::All)
    }
}
