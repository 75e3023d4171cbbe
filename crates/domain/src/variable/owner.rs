//! Declaration ownership

use serde::{Deserialize, Serialize};

/// The parent a variable declaration is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum Owner {
    /// Declared directly on a project (by permalink).
    Project(String),
    /// Inherited from a variable group (by id).
    Group(String),
}

impl Owner {
    /// Returns true when the declaration belongs to a project.
    #[must_use]
    pub const fn is_project(&self) -> bool {
        matches!(self, Self::Project(_))
    }

    /// Returns the owner's identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Project(id) | Self::Group(id) => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_project() {
        assert!(Owner::Project("api".into()).is_project());
        assert!(!Owner::Group("shared".into()).is_project());
        assert_eq!(Owner::Group("shared".into()).id(), "shared");
    }
}
