//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware fills these in
//! from `stopwatch.toml` at build time; tests use the defaults.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
