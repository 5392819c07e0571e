//! Top-level configuration and validation

use heapless::FnvIndexSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::hardware::{DisplayConfig, InputConfig};

/// Number of GPIO pins addressable by the configuration
pub const MAX_PINS: u8 = 30;

/// Longest digit hold; four digits then refresh every 12 ms, well inside
/// the ~16 ms persistence-of-vision budget
pub const MAX_DIGIT_HOLD_US: u32 = 3_000;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pin number beyond the chip's GPIO range
    PinOutOfRange(u8),
    /// Same pin assigned to more than one function
    DuplicatePin(u8),
    /// Debounce window of zero would let every bounce through
    ZeroDebounce,
    /// Digit hold outside `1..=MAX_DIGIT_HOLD_US`
    DigitHoldOutOfRange(u32),
}

/// Complete stopwatch configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StopwatchConfig {
    /// Button wiring
    pub input: InputConfig,
    /// Display wiring
    pub display: DisplayConfig,
}

impl StopwatchConfig {
    /// Check pin ranges, pin conflicts and timing bounds
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.debounce_ms == 0 {
            return Err(ConfigError::ZeroDebounce);
        }

        let hold = self.display.digit_hold_us;
        if hold == 0 || hold > MAX_DIGIT_HOLD_US {
            return Err(ConfigError::DigitHoldOutOfRange(hold));
        }

        let mut used: FnvIndexSet<u8, 32> = FnvIndexSet::new();
        for pin in self.pins() {
            if pin >= MAX_PINS {
                return Err(ConfigError::PinOutOfRange(pin));
            }
            // Capacity exceeds MAX_PINS, so insert only fails on a full set
            match used.insert(pin) {
                Ok(true) => {}
                Ok(false) | Err(_) => return Err(ConfigError::DuplicatePin(pin)),
            }
        }

        Ok(())
    }

    /// Every pin number referenced by the configuration
    pub fn pins(&self) -> impl Iterator<Item = u8> + '_ {
        let input = [self.input.reset.pin, self.input.start_stop.pin];
        input
            .into_iter()
            .chain(self.display.segment_pins)
            .chain(self.display.decimal_point_pin)
            .chain(self.display.digit_pins)
    }
}
