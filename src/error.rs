//! Error types for concat-config
//!
//! Library code returns `ConcatResult`; only the binary turns an error into a
//! process exit.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::markers::MarkerError;
use crate::domain::ports::FsError;

/// Result type alias for concat-config operations
pub type ConcatResult<T> = Result<T, ConcatError>;

/// Main error type for concat-config operations
#[derive(Error, Debug)]
pub enum ConcatError {
    /// The base fragment could not be read
    #[error("cannot read base file {path}: {source}")]
    BaseUnreadable {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// A target file could not be read
    #[error("cannot read target file {path}: {source}")]
    TargetUnreadable {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// A target file could not be written back
    #[error("cannot write target file {path}: {source}")]
    TargetUnwritable {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Target has a lone, duplicated or misordered marker
    #[error("malformed marker block in {path}: {problem}")]
    MalformedMarkers { path: PathBuf, problem: MarkerError },

    /// Watcher could not be created or subscribed to the base file
    #[error("cannot watch {path}: {message}")]
    WatchSetup { path: PathBuf, message: String },

    /// Invalid configuration file
    #[error("invalid config in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
