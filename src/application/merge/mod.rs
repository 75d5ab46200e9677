//! Merge Module
//!
//! Splices the base fragment into every target file.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`MergeOptions`)
//! - `result` - Result types (`MergeResult`, `TargetOutcome`)
//! - `use_case` - Core use case logic (`MergeUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use concat_config::application::merge::{MergeOptions, MergeUseCase};
//! use concat_config::infrastructure::LocalFs;
//!
//! let use_case = MergeUseCase::new(LocalFs::new());
//! let result = use_case.execute(&MergeOptions::new("base.toml", vec!["main.toml".into()]))?;
//! println!("{}", result.summary_line());
//! ```

mod options;
mod result;
mod use_case;

pub use options::MergeOptions;
pub use result::{MergeResult, TargetOutcome};
pub use use_case::MergeUseCase;

#[cfg(test)]
mod tests;
