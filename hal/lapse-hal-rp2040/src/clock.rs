//! Millisecond clock from the embassy time driver

use embassy_time::Instant;
use lapse_hal::Clock;

/// `lapse_hal::Clock` over `embassy_time::Instant`
///
/// Truncates the 64-bit uptime to `u32`, which wraps after ~49 days.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
