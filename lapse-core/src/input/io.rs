//! Stopwatch button orchestration
//!
//! Owns the reset and start/stop toggles. Both act on rising edges only.
//! Reset is polled first, so when both buttons fire in the same cycle the
//! stopwatch is reset before start/stop is applied.

use lapse_hal::{Clock, InputPin};

use super::toggle::{Callback, PinSource, StateSource, Toggle};
use crate::config::InputConfig;
use crate::time::Stopwatch;

/// Rising-edge handlers for the two buttons
pub struct IoCallbacks<C> {
    /// Reset pressed
    pub reset: Callback<C>,
    /// Start/stop pressed
    pub start_stop: Callback<C>,
}

/// The stopwatch's two debounced buttons
pub struct InputOutputState<R, S, C> {
    reset: Toggle<R, C>,
    start_stop: Toggle<S, C>,
}

impl<R: StateSource, S: StateSource, C> InputOutputState<R, S, C> {
    pub fn new(reset: R, start_stop: S, config: &InputConfig, callbacks: IoCallbacks<C>) -> Self {
        Self {
            reset: Toggle::new(reset, config.debounce_ms).on_press(callbacks.reset),
            start_stop: Toggle::new(start_stop, config.debounce_ms)
                .on_press(callbacks.start_stop),
        }
    }

    /// Poll both buttons, reset first
    pub fn update(&mut self, now_ms: u32, ctx: &mut C) {
        self.reset.update(now_ms, ctx);
        self.start_stop.update(now_ms, ctx);
    }

    /// Read the clock, then [`update`](Self::update); returns the timestamp used
    pub fn poll<K: Clock>(&mut self, clock: &K, ctx: &mut C) -> u32 {
        let now_ms = clock.now_ms();
        self.update(now_ms, ctx);
        now_ms
    }

    pub fn reset_toggle(&self) -> &Toggle<R, C> {
        &self.reset
    }

    pub fn start_stop_toggle(&self) -> &Toggle<S, C> {
        &self.start_stop
    }
}

impl<RP: InputPin, SP: InputPin, C> InputOutputState<PinSource<RP>, PinSource<SP>, C> {
    /// Bind both buttons to GPIO inputs using the configured polarity
    pub fn from_pins(
        reset: RP,
        start_stop: SP,
        config: &InputConfig,
        callbacks: IoCallbacks<C>,
    ) -> Self {
        Self::new(
            PinSource::from_config(reset, &config.reset),
            PinSource::from_config(start_stop, &config.start_stop),
            config,
            callbacks,
        )
    }
}

impl<R: StateSource, S: StateSource> InputOutputState<R, S, Stopwatch> {
    /// Reset clears and stops the stopwatch; start/stop flips it
    pub fn for_stopwatch(reset: R, start_stop: S, config: &InputConfig) -> Self {
        Self::new(reset, start_stop, config, Stopwatch::callbacks())
    }
}
