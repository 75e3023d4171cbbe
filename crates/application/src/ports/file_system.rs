//! File system abstraction port.

use std::path::{Path, PathBuf};

/// Error type for file system operations.
#[derive(Debug, thiserror::Error)]
pub enum FileSystemError {
    /// File not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission denied.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FileSystemError {
    /// Converts into a plain `std::io::Error`, keeping the error kind.
    #[must_use]
    pub fn into_io(self) -> std::io::Error {
        match self {
            Self::Io(io_err) => io_err,
            Self::NotFound(path) => {
                std::io::Error::new(std::io::ErrorKind::NotFound, path.display().to_string())
            }
            Self::PermissionDenied(path) => std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                path.display().to_string(),
            ),
        }
    }
}

/// Read access to documents on disk.
pub trait FileSystem: Send + Sync {
    /// Reads a file's contents as bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    fn read_file(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<Vec<u8>, FileSystemError>> + Send;
}
