//! Human-facing output for the binary

pub mod components;
pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
