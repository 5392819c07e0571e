//! Pin wiring from configuration

use lapse_core::config::{StopwatchConfig, DIGIT_COUNT, SEGMENT_COUNT};
use lapse_hal_rp2040::{GpioInput, GpioOutput, PinBank, PinError};

/// Every GPIO the stopwatch uses, configured for its role
pub struct Board {
    pub reset: GpioInput<'static>,
    pub start_stop: GpioInput<'static>,
    pub segments: [GpioOutput<'static>; SEGMENT_COUNT],
    pub decimal_point: Option<GpioOutput<'static>>,
    pub digits: [GpioOutput<'static>; DIGIT_COUNT],
}

impl Board {
    /// Take the configured pins out of the bank
    pub fn new(bank: &mut PinBank, config: &StopwatchConfig) -> Result<Self, PinError> {
        let input = &config.input;
        let display = &config.display;

        let reset = GpioInput::new(bank.take(input.reset.pin)?, &input.reset);
        let start_stop = GpioInput::new(bank.take(input.start_stop.pin)?, &input.start_stop);

        let segments = bank.take_array(display.segment_pins)?.map(GpioOutput::new);
        let decimal_point = display
            .decimal_point_pin
            .map(|pin| bank.take(pin))
            .transpose()?
            .map(GpioOutput::new);
        let digits = bank.take_array(display.digit_pins)?.map(GpioOutput::new);

        Ok(Self {
            reset,
            start_stop,
            segments,
            decimal_point,
            digits,
        })
    }
}
