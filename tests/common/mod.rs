//! Common test utilities for concat-config CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project and home directories plus CLI helpers
//! - Fixtures: reusable base and target content

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
