//! Scope ranker port
//!
//! Decides which declarations a deploy target sees and which one wins.

use stratum_domain::{DeployTarget, ScopeRef, VariableDeclaration};

/// Rank of a scope that is not part of a target's scope order.
pub const UNRANKED: usize = 999;

/// Priority of a declaration for a target. Lower sorts first and wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority {
    /// Rank of the declaration's owner (project before group).
    pub owner: usize,
    /// Rank of the declaration's scope in the target's scope order.
    pub scope: usize,
}

/// Ranks scopes for a deploy target.
pub trait ScopeRanker: Send + Sync {
    /// Scopes that apply to `target`, highest priority first.
    fn scope_order(&self, target: &DeployTarget) -> Vec<ScopeRef>;

    /// Position of `scope` in the target's scope order, or [`UNRANKED`].
    fn scope_rank(&self, scope: &ScopeRef, target: &DeployTarget) -> usize {
        self.scope_order(target)
            .iter()
            .position(|candidate| candidate == scope)
            .unwrap_or(UNRANKED)
    }

    /// Priority of `declaration` when resolving for `target`.
    ///
    /// Project-owned declarations outrank group-owned ones; within an owner
    /// kind the scope order decides.
    fn priority(&self, declaration: &VariableDeclaration, target: &DeployTarget) -> Priority {
        Priority {
            owner: usize::from(!declaration.owner.is_project()),
            scope: self.scope_rank(&declaration.scope, target),
        }
    }

    /// Whether `declaration` applies to `target` at all.
    fn matches(&self, declaration: &VariableDeclaration, target: &DeployTarget) -> bool {
        self.scope_order(target).contains(&declaration.scope)
    }
}
