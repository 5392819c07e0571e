//! Minutes/seconds view of an elapsed duration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const MS_PER_SECOND: u32 = 1_000;
const MS_PER_MINUTE: u32 = 60 * MS_PER_SECOND;

/// Stopwatch time as shown on the display
///
/// Minutes wrap at 60, so the display rolls over from 59:59 to 00:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StopwatchTime {
    /// 0-59
    pub minutes: u8,
    /// 0-59
    pub seconds: u8,
}

impl StopwatchTime {
    pub fn from_millis(milliseconds: u32) -> Self {
        let mut time = Self::default();
        time.update(milliseconds);
        time
    }

    /// Convert elapsed milliseconds (now - start reference) to minutes and seconds
    pub fn update(&mut self, milliseconds: u32) {
        // Both values are < 60 after the modulo, so the casts are lossless
        self.minutes = ((milliseconds / MS_PER_MINUTE) % 60) as u8;
        self.seconds = ((milliseconds / MS_PER_SECOND) % 60) as u8;
    }

    /// Decimal digits left to right: minutes tens, minutes units,
    /// seconds tens, seconds units
    pub fn digits(&self) -> [u8; 4] {
        [
            self.minutes / 10,
            self.minutes % 10,
            self.seconds / 10,
            self.seconds % 10,
        ]
    }
}
