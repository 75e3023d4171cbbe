//! Resolution pipeline
//!
//! Three stages turn raw declarations into the environment of a deploy target:
//!
//! 1. [`collapse`] picks the highest-priority matching declaration per name.
//! 2. [`interpolate`] rewrites `${NAME}` / `$NAME` references in one pass.
//! 3. [`resolve_secrets`] replaces secret references, in preview or commit mode.
//!
//! [`sort_by_scopes`] and [`serialize`] render declarations for humans.

mod interpolator;
mod scope_resolver;
mod secrets;
mod sorting;

pub use interpolator::interpolate;
pub use scope_resolver::collapse;
pub use secrets::{ResolveMode, resolve_secrets, secret_names};
pub use sorting::{scope_rank, serialize, sort_by_scopes};
