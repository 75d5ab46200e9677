//! Application Layer
//!
//! Use cases that orchestrate the business flow. Splicing rules live in the
//! domain layer; this layer reads, writes and reacts to file changes.
//!
//! ## Use Cases
//!
//! - `MergeUseCase` - Splice the base file into every target
//! - `WatchUseCase` - Re-run the merge when the base file is written

pub mod merge;
pub mod watch;

pub use merge::{MergeOptions, MergeResult, MergeUseCase, TargetOutcome};
pub use watch::{
    is_write_event, run_event_loop, Decision, LeadingEdgeDebouncer, WatchEvent, WatchOptions,
    WatchUseCase,
};
