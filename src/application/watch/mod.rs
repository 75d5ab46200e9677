//! Watch Use Case
//!
//! Keeps target files in sync with the base file while it is being edited:
//! - File system monitoring (via `notify` crate)
//! - Leading-edge debouncing (50ms default)
//! - Graceful shutdown through a shared `running` flag
//!
//! ## Usage
//!
//! ```ignore
//! let options = WatchOptions::new(MergeOptions::new("base.toml", targets));
//! let use_case = WatchUseCase::new(options, LocalFs::new());
//! use_case.start(running, |event| { ... })?;
//! ```

mod debounce;
mod event;
mod use_case;


pub use debounce::{Decision, LeadingEdgeDebouncer};
pub use event::{WatchEvent, WatchOptions, POLL_INTERVAL_MS};
pub use use_case::{is_write_event, run_event_loop, WatchUseCase};
