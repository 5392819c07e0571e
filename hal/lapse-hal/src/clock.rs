//! Millisecond clock abstraction

/// Free-running millisecond counter
///
/// The counter is expected to wrap at `u32::MAX`. Consumers compare
/// timestamps with wrapping arithmetic, so a wrap between two readings is
/// harmless as long as the readings are less than ~49 days apart.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed epoch (usually boot)
    fn now_ms(&self) -> u32;
}
