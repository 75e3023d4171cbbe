//! Standard scope ranking.

use stratum_application::ports::ScopeRanker;
use stratum_domain::{DeployTarget, ScopeRef};

/// Ranks deploy group scopes above environment scopes above `All`.
///
/// Ownership is compared before scope: a project declaration scoped to `All`
/// beats a group declaration scoped to the target's deploy group. Scope rank
/// only orders declarations with the same kind of owner.
///
/// A target without a deploy group only sees `All` declarations.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScopeRanker;

impl StandardScopeRanker {
    /// Creates the ranker.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ScopeRanker for StandardScopeRanker {
    fn scope_order(&self, target: &DeployTarget) -> Vec<ScopeRef> {
        match &target.deploy_group {
            Some(group) => vec![
                ScopeRef::deploy_group(&group.permalink),
                ScopeRef::environment(&group.environment.permalink),
                ScopeRef::All,
            ],
            None => vec![ScopeRef::All],
        }
    }
}
