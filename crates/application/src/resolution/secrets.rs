//! Secret reference resolution
//!
//! Values starting with the secret marker are looked up in a secret session.
//! Preview mode only expands keys and flags failures inline; commit mode
//! reads every value first and verifies the whole batch at the end.

use std::collections::BTreeSet;

use stratum_domain::secret::{is_secret_reference, secret_key};
use stratum_domain::{EffectiveMapping, FAILED_LOOKUP_MARK, SECRET_MARKER};
use tracing::{debug, warn};

use crate::error::ResolveResult;
use crate::ports::SecretSession;

/// How secret references are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolveMode {
    /// Expand keys to their canonical path without reading values. Never fails.
    Preview,
    /// Read every value and fail if any key is missing.
    #[default]
    Commit,
}

impl ResolveMode {
    /// Maps a `preview` flag to a mode.
    #[must_use]
    pub const fn from_preview(preview: bool) -> Self {
        if preview { Self::Preview } else { Self::Commit }
    }
}

/// Resolves every secret reference of `mapping` in place.
///
/// # Errors
/// In commit mode, returns `ResolveError::MissingSecrets` after all keys were
/// attempted if any of them was not found, and propagates other backend
/// errors unchanged. Preview mode never fails.
pub async fn resolve_secrets(
    mapping: &mut EffectiveMapping,
    session: &mut (dyn SecretSession + '_),
    mode: ResolveMode,
) -> ResolveResult<()> {
    let references: Vec<(String, String)> = mapping
        .iter()
        .filter_map(|(name, value)| secret_key(value).map(|key| (name.clone(), key.to_string())))
        .collect();

    for (name, key) in &references {
        let resolved = match mode {
            ResolveMode::Preview => match session.expand_key(key).await {
                Some(path) => format!("{SECRET_MARKER}{path}"),
                None => {
                    warn!(variable = %name, key = %key, "secret lookup failed");
                    format!("{SECRET_MARKER}{key}{FAILED_LOOKUP_MARK}")
                }
            },
            ResolveMode::Commit => session.read(key).await?.unwrap_or_default(),
        };
        mapping.insert(name.clone(), resolved);
    }

    if mode == ResolveMode::Commit {
        session.verify()?;
    }

    debug!(secrets = references.len(), ?mode, "resolved secret references");
    Ok(())
}

/// Names whose value is a secret reference. Does not touch any backend.
#[must_use]
pub fn secret_names(mapping: &EffectiveMapping) -> BTreeSet<String> {
    mapping
        .iter()
        .filter(|(_, value)| is_secret_reference(value))
        .map(|(name, _)| name.clone())
        .collect()
}
