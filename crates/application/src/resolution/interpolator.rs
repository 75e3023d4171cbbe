//! Dollar-variable interpolation
//!
//! Rewrites `${NAME}` and `$NAME` references using other values of the same
//! mapping. A single pass is performed; references are looked up in the
//! mapping as it is at the time of the lookup.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use stratum_domain::EffectiveMapping;
use tracing::debug;

#[allow(clippy::expect_used)]
static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{(\w+)\}|\$(\w+)").expect("valid regex"));

/// Interpolates every value of `mapping` in place.
///
/// Unknown references are left verbatim. Chains of references are not
/// followed: `A=$B, B=$C, C=x` leaves `A` as `$C` when `A` is visited first.
pub fn interpolate(mapping: &mut EffectiveMapping) {
    let names: Vec<String> = mapping.keys().cloned().collect();
    let mut rewritten = 0usize;

    for name in names {
        let Some(value) = mapping.get(&name) else {
            continue;
        };
        if !value.contains('$') {
            continue;
        }

        let replaced = REFERENCE
            .replace_all(value, |caps: &Captures<'_>| {
                let reference = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
                mapping
                    .get(reference)
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned();

        if &replaced != value {
            rewritten += 1;
            mapping.insert(name, replaced);
        }
    }

    debug!(rewritten, "interpolated variable references");
}
