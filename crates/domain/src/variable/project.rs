//! Projects and variable groups

use serde::{Deserialize, Serialize};

use super::declaration::VariableDeclaration;

/// A reusable set of declarations that projects can include.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableGroup {
    /// Group identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Declarations owned by the group.
    #[serde(default)]
    pub variables: Vec<VariableDeclaration>,
}

/// A deployable project with its own declarations and included groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// URL-safe identifier.
    pub permalink: String,
    /// Display name.
    pub name: String,
    /// Declarations attached directly to the project.
    #[serde(default)]
    pub variables: Vec<VariableDeclaration>,
    /// Variable groups the project includes, in inclusion order.
    #[serde(default)]
    pub groups: Vec<VariableGroup>,
}

impl Project {
    /// Creates a project without declarations.
    #[must_use]
    pub fn new(permalink: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            permalink: permalink.into(),
            name: name.into(),
            variables: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Flattens the project's own declarations with the inherited ones.
    ///
    /// Own declarations come first, then each group's declarations in group order.
    #[must_use]
    pub fn nested_variables(&self) -> Vec<VariableDeclaration> {
        self.variables
            .iter()
            .chain(self.groups.iter().flat_map(|group| group.variables.iter()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::variable::ScopeRef;
    use pretty_assertions::assert_eq;

    fn group(id: &str, names: &[&str]) -> VariableGroup {
        VariableGroup {
            id: id.to_string(),
            name: id.to_uppercase(),
            variables: names
                .iter()
                .map(|name| VariableDeclaration::group(id, *name, "g", ScopeRef::All))
                .collect(),
        }
    }

    #[test]
    fn test_nested_variables_order() {
        let mut project = Project::new("api", "API");
        project
            .variables
            .push(VariableDeclaration::project("api", "OWN", "p", ScopeRef::All));
        project.groups.push(group("first", &["A", "B"]));
        project.groups.push(group("second", &["C"]));

        let names: Vec<_> = project
            .nested_variables()
            .into_iter()
            .map(|v| v.name)
            .collect();

        assert_eq!(names, vec!["OWN", "A", "B", "C"]);
    }

    #[test]
    fn test_nested_variables_empty() {
        assert!(Project::new("api", "API").nested_variables().is_empty());
    }
}
