//! Secret backend implementations

mod file_backend;
mod key_resolver;

pub use file_backend::FileSecretBackend;
pub use key_resolver::KeyResolver;
