//! 7-segment display drivers
//!
//! - `table`: digit to segment bit pattern lookup
//! - `mux`: 4-digit display with transistor digit selection

mod mux;
mod table;

pub use mux::{DisplayError, MuxDisplay, Polarity};
pub use table::{segment_pattern, BLANK, SEGMENT_TABLE};
