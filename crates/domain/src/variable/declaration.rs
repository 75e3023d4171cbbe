//! Raw variable declarations

use serde::{Deserialize, Serialize};

use super::owner::Owner;
use super::scope::ScopeRef;

/// A single variable as declared on a project or a variable group.
///
/// Several declarations may share a name as long as their scopes differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    /// Variable name (e.g. `DATABASE_URL`).
    pub name: String,

    /// Raw value, possibly containing `$REF` references or a secret reference.
    pub value: String,

    /// Where the declaration applies.
    #[serde(default)]
    pub scope: ScopeRef,

    /// The project or group this declaration is attached to.
    pub owner: Owner,
}

impl VariableDeclaration {
    /// Creates a project-owned declaration.
    #[must_use]
    pub fn project(
        project: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
        scope: ScopeRef,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            scope,
            owner: Owner::Project(project.into()),
        }
    }

    /// Creates a group-owned declaration.
    #[must_use]
    pub fn group(
        group: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
        scope: ScopeRef,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            scope,
            owner: Owner::Group(group.into()),
        }
    }
}
