pub mod merge;
pub mod watch;
