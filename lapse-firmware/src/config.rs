//! Board configuration
//!
//! `build.rs` turns stopwatch.toml into `STOPWATCH_CONFIG`. The build
//! script already rejects bad files; validating again here catches drift
//! between its rules and `StopwatchConfig::validate`.

use defmt::*;
use lapse_core::config::{ConfigError, DisplayConfig, InputConfig, PinConfig, StopwatchConfig};

include!(concat!(env!("OUT_DIR"), "/stopwatch_config.rs"));

/// Validated configuration compiled into the firmware
pub fn load() -> Result<StopwatchConfig, ConfigError> {
    let config = STOPWATCH_CONFIG;
    config.validate()?;

    info!(
        "Buttons: reset=GPIO{} start/stop=GPIO{}, debounce {}ms",
        config.input.reset.pin, config.input.start_stop.pin, config.input.debounce_ms
    );
    info!(
        "Display: segments={} digits={} dp={}, hold {}us ({}us/cycle)",
        config.display.segment_pins,
        config.display.digit_pins,
        config.display.decimal_point_pin,
        config.display.digit_hold_us,
        config.display.cycle_us()
    );

    Ok(config)
}
