//! Hardware configuration types
//!
//! Pin assignments for the two buttons and the multiplexed display.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of segment lines (A-G, decimal point excluded)
pub const SEGMENT_COUNT: usize = 7;

/// Number of digit positions on the display
pub const DIGIT_COUNT: usize = 4;

/// Default debounce window for both buttons
pub const DEFAULT_DEBOUNCE_MS: u32 = 50;

/// Default on-time for a single digit during multiplexing
pub const DEFAULT_DIGIT_HOLD_US: u32 = 2_000;

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a button pin: active-low with the internal pull-up enabled
    pub const fn button(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: true,
        }
    }
}

/// Button wiring and debounce timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InputConfig {
    /// Reset button
    pub reset: PinConfig,
    /// Start/stop button
    pub start_stop: PinConfig,
    /// Minimum time between two accepted edges of the same button
    pub debounce_ms: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            reset: PinConfig::button(14),
            start_stop: PinConfig::button(15),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// 7-segment display wiring
///
/// Segment pins are ordered A through G. Digit pins are ordered left to
/// right: minutes tens, minutes units, seconds tens, seconds units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Segment lines A-G
    pub segment_pins: [u8; SEGMENT_COUNT],
    /// Decimal point line, used as the minutes:seconds separator
    pub decimal_point_pin: Option<u8>,
    /// Digit-select transistor lines
    pub digit_pins: [u8; DIGIT_COUNT],
    /// Segments light when driven low (common-anode display)
    pub segments_active_low: bool,
    /// Digit transistors conduct when driven low (PNP high-side switching)
    pub digits_active_low: bool,
    /// How long each digit stays lit per multiplex cycle
    pub digit_hold_us: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            segment_pins: [0, 1, 2, 3, 4, 5, 6],
            decimal_point_pin: Some(7),
            digit_pins: [8, 9, 10, 11],
            segments_active_low: false,
            digits_active_low: false,
            digit_hold_us: DEFAULT_DIGIT_HOLD_US,
        }
    }
}

impl DisplayConfig {
    /// Total time for one pass over all digits
    pub fn cycle_us(&self) -> u32 {
        self.digit_hold_us.saturating_mul(DIGIT_COUNT as u32)
    }
}
