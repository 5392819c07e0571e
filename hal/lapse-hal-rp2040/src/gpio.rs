//! GPIO wrappers implementing the `lapse-hal` pin traits

use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::Peri;
use lapse_core::config::PinConfig;

/// Push-pull output pin
pub struct GpioOutput<'d> {
    pin: Output<'d>,
}

impl<'d> GpioOutput<'d> {
    /// Configure `pin` as an output, initially low
    pub fn new(pin: Peri<'d, AnyPin>) -> Self {
        Self {
            pin: Output::new(pin, Level::Low),
        }
    }
}

impl lapse_hal::OutputPin for GpioOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Digital input pin
///
/// Reports the raw electrical level. Button polarity is applied by
/// `lapse_core::PinSource`.
pub struct GpioInput<'d> {
    pin: Input<'d>,
}

impl<'d> GpioInput<'d> {
    /// Configure `pin` as an input with the pull from `config`
    pub fn new(pin: Peri<'d, AnyPin>, config: &PinConfig) -> Self {
        let pull = if config.pull_up {
            Pull::Up
        } else if config.inverted {
            // Active-low without an internal pull-up relies on an external one
            Pull::None
        } else {
            Pull::Down
        };
        Self {
            pin: Input::new(pin, pull),
        }
    }
}

impl lapse_hal::InputPin for GpioInput<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
