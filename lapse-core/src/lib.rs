//! Board-agnostic core logic for the stopwatch firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Edge tracking and debounced button toggles
//! - Elapsed-time accumulator with an explicit run state machine
//! - Minutes/seconds conversion for the display
//! - Button orchestration (reset, start/stop)
//! - Configuration type definitions and validation

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod input;
pub mod time;

pub use config::{ConfigError, DisplayConfig, InputConfig, PinConfig, StopwatchConfig};
pub use input::{Edge, InputOutputState, IoCallbacks, PinSource, PreviousState, StateSource, Toggle};
pub use time::{RunState, Stopwatch, StopwatchTime};
