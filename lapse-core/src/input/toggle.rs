//! Debounced edge detection
//!
//! A [`Toggle`] samples a boolean source once per loop cycle and reports
//! clean press/release edges. After an edge is accepted, further edges are
//! ignored until the debounce window has passed. Edges inside the window
//! are dropped, not queued, so contact bounce never produces a second
//! event.

use lapse_hal::InputPin;

use super::previous::PreviousState;
use crate::config::PinConfig;

/// Edge callback: receives the shared context and the cycle timestamp
pub type Callback<C> = fn(&mut C, u32);

/// Accepted signal transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// false -> true (button pressed)
    Rising,
    /// true -> false (button released)
    Falling,
}

/// Source of the logical button state
///
/// `true` means "pressed", whatever the pin polarity is.
pub trait StateSource {
    fn state(&mut self) -> bool;
}

impl<F: FnMut() -> bool> StateSource for F {
    fn state(&mut self) -> bool {
        self()
    }
}

/// Reads a GPIO input and applies the configured polarity
pub struct PinSource<P> {
    pin: P,
    /// If true, pressed = pin LOW
    inverted: bool,
}

impl<P: InputPin> PinSource<P> {
    pub fn new(pin: P, inverted: bool) -> Self {
        Self { pin, inverted }
    }

    /// Build from a pin config (only the polarity is used here)
    pub fn from_config(pin: P, config: &PinConfig) -> Self {
        Self::new(pin, config.inverted)
    }
}

impl<P: InputPin> StateSource for PinSource<P> {
    fn state(&mut self) -> bool {
        self.pin.is_high() != self.inverted
    }
}

fn ignore<C>(_: &mut C, _: u32) {}

/// Debounced button with press/release callbacks
pub struct Toggle<S, C> {
    source: S,
    on_press: Callback<C>,
    on_release: Callback<C>,
    value: PreviousState<bool>,
    /// Timestamp of the last accepted edge, rising or falling
    last_edge_ms: Option<u32>,
    debounce_ms: u32,
    /// Edge accepted by the most recent update
    edge: Option<Edge>,
}

impl<S: StateSource, C> Toggle<S, C> {
    /// Create a toggle with no-op callbacks
    ///
    /// The source is sampled once here so a button held during power-up
    /// does not register as a press.
    pub fn new(mut source: S, debounce_ms: u32) -> Self {
        let initial = source.state();
        Self {
            source,
            on_press: ignore::<C>,
            on_release: ignore::<C>,
            value: PreviousState::new(initial, initial),
            last_edge_ms: None,
            debounce_ms,
            edge: None,
        }
    }

    /// Bind the rising-edge callback
    pub fn on_press(mut self, callback: Callback<C>) -> Self {
        self.on_press = callback;
        self
    }

    /// Bind the falling-edge callback
    pub fn on_release(mut self, callback: Callback<C>) -> Self {
        self.on_release = callback;
        self
    }

    /// Sample the source and fire a callback on an accepted edge
    ///
    /// Call once per loop cycle.
    pub fn update(&mut self, now_ms: u32, ctx: &mut C) -> Option<Edge> {
        let state = self.source.state();
        self.value.new_value(state);

        let edge = match (self.value.previous, self.value.current) {
            (false, true) => Some(Edge::Rising),
            (true, false) => Some(Edge::Falling),
            _ => None,
        };

        self.edge = match edge {
            Some(edge) if self.window_elapsed(now_ms) => Some(edge),
            _ => None,
        };

        match self.edge {
            Some(Edge::Rising) => {
                self.last_edge_ms = Some(now_ms);
                (self.on_press)(ctx, now_ms);
            }
            Some(Edge::Falling) => {
                self.last_edge_ms = Some(now_ms);
                (self.on_release)(ctx, now_ms);
            }
            None => {}
        }

        self.edge
    }

    fn window_elapsed(&self, now_ms: u32) -> bool {
        match self.last_edge_ms {
            Some(last) => now_ms.wrapping_sub(last) >= self.debounce_ms,
            None => true,
        }
    }

    /// The most recent update accepted a press
    pub fn is_pressed(&self) -> bool {
        self.edge == Some(Edge::Rising)
    }

    /// The most recent update accepted a release
    pub fn is_released(&self) -> bool {
        self.edge == Some(Edge::Falling)
    }

    /// Last sampled level, debounced or not
    pub fn is_high(&self) -> bool {
        self.value.current
    }
}
