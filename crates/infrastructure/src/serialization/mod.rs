//! Document serialization for Stratum files.
//!
//! Manifests and secret files may be written as JSON or YAML; the format is
//! chosen from the file extension. Resolved environments are printed as
//! pretty JSON with sorted keys.

mod json;

use std::path::Path;

use serde::de::DeserializeOwned;

pub use json::*;

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    JsonDeserialize(serde_json::Error),

    /// YAML deserialization failed.
    #[error("YAML deserialization failed: {0}")]
    YamlDeserialize(#[from] serde_yaml::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Format of a document on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.json` files.
    Json,
    /// `.yaml` / `.yml` files (and anything without a known extension).
    Yaml,
}

impl DocumentFormat {
    /// Picks the format from a path's extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Deserializes YAML from bytes.
///
/// # Errors
///
/// Returns an error if the YAML is invalid or doesn't match the expected type.
pub fn from_yaml_bytes<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    Ok(serde_yaml::from_slice(bytes)?)
}

/// Deserializes a document in the given format.
///
/// # Errors
///
/// Returns an error if the document is invalid or doesn't match the expected type.
pub fn from_document_bytes<T: DeserializeOwned>(
    format: DocumentFormat,
    bytes: &[u8],
) -> Result<T, SerializationError> {
    match format {
        DocumentFormat::Json => from_json_bytes(bytes),
        DocumentFormat::Yaml => from_yaml_bytes(bytes),
    }
}
