//! FileSystem port - abstraction over file I/O operations
//!
//! Lets the merge use case read and write files without depending on a
//! concrete implementation (local disk in production, in-memory in tests).

use std::path::Path;

use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    /// File not found
    #[error("file not found")]
    NotFound,
    /// Permission denied
    #[error("permission denied")]
    PermissionDenied,
    /// Any other I/O error
    #[error(transparent)]
    Io(std::io::Error),
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound,
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied,
            _ => FsError::Io(err),
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - in-memory fakes in unit tests
pub trait FileSystem {
    /// Read the file's raw bytes
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Replace the file's content
    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()>;
}
