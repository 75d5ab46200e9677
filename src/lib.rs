//! concat-config - splice a shared base TOML fragment into config files
//!
//! Every target file gets the base file's contents between two marker
//! comments. Re-running replaces the block in place; watch mode re-runs the
//! merge each time the base file is written.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    MergeOptions, MergeResult, MergeUseCase, WatchEvent, WatchOptions, WatchUseCase,
};
pub use config::Config;
pub use domain::{splice, MarkerPair, SpliceAction};
pub use error::{ConcatError, ConcatResult};
pub use infrastructure::LocalFs;
