//! Infrastructure Layer
//!
//! Concrete implementations of domain ports. All disk I/O lives here.

pub mod fs;

pub use fs::{LocalFs, DEFAULT_FILE_MODE};
