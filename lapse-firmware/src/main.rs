//! Lapse - Stopwatch Firmware
//!
//! Two debounced buttons (reset, start/stop) drive a stopwatch shown as
//! MM:SS on a multiplexed 4-digit 7-segment display.
//!
//! Everything runs in one cooperative loop: poll buttons, compute the
//! elapsed time, then multiplex the display once. Input always precedes
//! rendering, so a button press shows up in the same cycle.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use lapse_core::{InputOutputState, Stopwatch, StopwatchTime};
use lapse_drivers::MuxDisplay;
use lapse_hal_rp2040::{EmbassyClock, PinBank};

use crate::board::Board;

mod board;
mod config;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Lapse stopwatch starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = unwrap!(config::load());
    let mut bank = PinBank::new(p);
    let board = unwrap!(Board::new(&mut bank, &config));
    info!("Pins configured");

    let mut io = InputOutputState::from_pins(
        board.reset,
        board.start_stop,
        &config.input,
        Stopwatch::callbacks(),
    );
    let mut display = MuxDisplay::new(
        board.segments,
        board.decimal_point,
        board.digits,
        Delay,
        &config.display,
    );

    let clock = EmbassyClock;
    let mut watch = Stopwatch::new();
    let mut time = StopwatchTime::default();

    info!("Stopwatch ready");

    loop {
        let now = io.poll(&clock, &mut watch);

        if io.reset_toggle().is_pressed() {
            debug!("Reset at {}ms -> {}", now, watch.state());
        }
        if io.start_stop_toggle().is_pressed() {
            debug!("Start/stop at {}ms -> {}", now, watch.state());
        }

        time.update(watch.elapsed_ms(now));

        if let Err(e) = display.display_stopwatch_time(&time) {
            warn!("Display error: {}", e);
        }
    }
}
