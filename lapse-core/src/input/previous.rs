//! Two-slot value history

use core::ops::Sub;

/// Keeps the current and the previous value of `T`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PreviousState<T> {
    /// Most recent value
    pub current: T,
    /// Value before the most recent one
    pub previous: T,
}

impl<T: Copy> PreviousState<T> {
    pub const fn new(current: T, previous: T) -> Self {
        Self { current, previous }
    }

    /// Shift current into previous and store `value` as current
    pub fn new_value(&mut self, value: T) {
        self.previous = self.current;
        self.current = value;
    }
}

impl<T: Copy + PartialEq> PreviousState<T> {
    /// Did the most recent `new_value` change anything
    pub fn changed(&self) -> bool {
        self.current != self.previous
    }
}

impl<T: Copy + Sub<Output = T>> PreviousState<T> {
    /// `current - previous`
    pub fn difference(&self) -> T {
        self.current - self.previous
    }
}
