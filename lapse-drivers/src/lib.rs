//! Hardware driver implementations
//!
//! This crate provides concrete drivers built on the `lapse-hal` traits:
//!
//! - Multiplexed 4-digit 7-segment display

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod seven_segment;

pub use seven_segment::{segment_pattern, DisplayError, MuxDisplay, Polarity, SEGMENT_TABLE};
