//! Domain Ports (Interfaces)
//!
//! Infrastructure provides the concrete implementations.

pub mod file_system;

pub use file_system::{FileSystem, FsError, FsResult};
