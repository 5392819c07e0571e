//! Elapsed-time tracking and display conversion

pub mod display_time;
pub mod stopwatch;

pub use display_time::StopwatchTime;
pub use stopwatch::{RunState, Stopwatch};
