//! Scope collapsing
//!
//! Turns raw declarations into one value per name for a deploy target.

use stratum_domain::{DeployTarget, EffectiveMapping, VariableDeclaration};
use tracing::{debug, trace};

use crate::ports::ScopeRanker;

/// Collapses `declarations` into the effective mapping seen by `target`.
///
/// Declarations are ordered by the ranker's priority (stable, so ties keep
/// their input order) and the first matching declaration of each name wins.
/// Declarations whose scope does not match the target are ignored.
#[must_use]
pub fn collapse<R>(
    declarations: &[VariableDeclaration],
    target: &DeployTarget,
    ranker: &R,
) -> EffectiveMapping
where
    R: ScopeRanker + ?Sized,
{
    let mut ranked: Vec<_> = declarations
        .iter()
        .map(|declaration| (ranker.priority(declaration, target), declaration))
        .collect();
    ranked.sort_by_key(|(priority, _)| *priority);

    let mut mapping = EffectiveMapping::new();
    for (_, declaration) in ranked {
        if mapping.contains_key(&declaration.name) || !ranker.matches(declaration, target) {
            continue;
        }
        trace!(
            name = %declaration.name,
            owner = declaration.owner.id(),
            scope = %declaration.scope,
            "declaration selected"
        );
        mapping.insert(declaration.name.clone(), declaration.value.clone());
    }

    debug!(
        project = %target.project,
        declarations = declarations.len(),
        variables = mapping.len(),
        "collapsed scoped declarations"
    );
    mapping
}
