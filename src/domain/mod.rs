//! Domain Layer
//!
//! Pure text manipulation plus the ports the application layer drives.
//!
//! ## Structure
//!
//! - `markers` - Marker block detection and splicing
//! - `ports/` - Interface definitions for infrastructure
//!
//! Nothing in this layer touches the file system directly; all I/O goes
//! through a port.

pub mod markers;
pub mod ports;

pub use markers::{splice, BlockSpan, MarkerError, MarkerPair, Splice, SpliceAction};
