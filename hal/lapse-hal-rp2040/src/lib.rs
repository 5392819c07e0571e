//! RP2040-specific HAL for the stopwatch firmware
//!
//! This crate provides RP2040 implementations of the shared `lapse-hal`
//! traits:
//!
//! - GPIO input/output wrappers (implement `lapse_hal::InputPin` / `OutputPin`)
//! - Dynamic pin allocation for config-driven setup
//! - Millisecond clock backed by the embassy time driver

#![no_std]

pub mod clock;
pub mod gpio;
pub mod pins;

pub use clock::EmbassyClock;
pub use gpio::{GpioInput, GpioOutput};
pub use pins::{PinBank, PinError};
