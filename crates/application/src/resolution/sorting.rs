//! Deterministic ordering and text rendering of declarations.

use std::borrow::Cow;
use std::cmp::Ordering;

use stratum_domain::{Scope, ScopeRef, VariableDeclaration};

use crate::ports::UNRANKED;

/// Position of `scope` in `scope_order`, or [`UNRANKED`] when absent.
#[must_use]
pub fn scope_rank(scope: &ScopeRef, scope_order: &[Scope]) -> usize {
    scope_order
        .iter()
        .position(|entry| &entry.reference == scope)
        .unwrap_or(UNRANKED)
}

/// Sorts declarations by name, then by the rank of their scope in `scope_order`.
///
/// The name dominates: scopes only order declarations sharing a name.
#[must_use]
pub fn sort_by_scopes<'a>(
    variables: &'a [VariableDeclaration],
    scope_order: &[Scope],
) -> Vec<&'a VariableDeclaration> {
    let mut sorted: Vec<&VariableDeclaration> = variables.iter().collect();
    sorted.sort_by(|a, b| compare(a, b, scope_order));
    sorted
}

fn compare(a: &VariableDeclaration, b: &VariableDeclaration, scope_order: &[Scope]) -> Ordering {
    a.name.cmp(&b.name).then_with(|| {
        scope_rank(&a.scope, scope_order).cmp(&scope_rank(&b.scope, scope_order))
    })
}

/// Renders declarations as `NAME="VALUE" # Scope` lines, sorted by [`sort_by_scopes`].
///
/// Lines are joined with `\n`; there is no trailing newline.
#[must_use]
pub fn serialize(variables: &[VariableDeclaration], scope_order: &[Scope]) -> String {
    sort_by_scopes(variables, scope_order)
        .into_iter()
        .map(|variable| {
            format!(
                "{}={:?} # {}",
                variable.name,
                variable.value,
                scope_name(&variable.scope, scope_order)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn scope_name<'a>(scope: &ScopeRef, scope_order: &'a [Scope]) -> Cow<'a, str> {
    if let Some(entry) = scope_order.iter().find(|entry| &entry.reference == scope) {
        return Cow::Borrowed(&entry.name);
    }
    if scope.is_all() {
        Cow::Borrowed("All")
    } else {
        Cow::Owned(scope.to_string())
    }
}
