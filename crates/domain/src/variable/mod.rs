//! Variable declaration domain types

mod declaration;
mod owner;
mod project;
mod scope;

use std::collections::BTreeMap;

pub use declaration::VariableDeclaration;
pub use owner::Owner;
pub use project::{Project, VariableGroup};
pub use scope::{Scope, ScopeRef};

/// One value per variable name, as seen by a deploy target.
pub type EffectiveMapping = BTreeMap<String, String>;
