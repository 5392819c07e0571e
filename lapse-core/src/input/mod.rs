//! Button input handling
//!
//! Raw pin levels flow through [`PreviousState`] into a debounced
//! [`Toggle`]; [`InputOutputState`] owns the stopwatch's two toggles and
//! polls them in a fixed order every loop cycle.

pub mod io;
pub mod previous;
pub mod toggle;

pub use io::{InputOutputState, IoCallbacks};
pub use previous::PreviousState;
pub use toggle::{Callback, Edge, PinSource, StateSource, Toggle};
