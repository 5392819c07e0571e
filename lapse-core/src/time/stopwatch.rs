//! Elapsed-time accumulator
//!
//! Time only accumulates while running. Stopping folds the running span
//! into `accumulated_ms`, which freezes the displayed value until the next
//! start.

use crate::input::IoCallbacks;

/// Run state of the stopwatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunState {
    /// Not counting; elapsed time is frozen
    #[default]
    Stopped,
    /// Counting since `started_ms`
    Running { started_ms: u32 },
}

/// Stopwatch state machine {Stopped, Running}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Stopwatch {
    state: RunState,
    /// Time collected by previous running spans
    accumulated_ms: u32,
}

impl Stopwatch {
    /// Stopped at zero
    pub const fn new() -> Self {
        Self {
            state: RunState::Stopped,
            accumulated_ms: 0,
        }
    }

    /// Button bindings: reset on reset, toggle on start/stop
    pub fn callbacks() -> IoCallbacks<Self> {
        IoCallbacks {
            reset: |watch, _| watch.reset(),
            start_stop: Self::toggle,
        }
    }

    /// Begin counting; no-op if already running
    pub fn start(&mut self, now_ms: u32) {
        if self.state == RunState::Stopped {
            self.state = RunState::Running { started_ms: now_ms };
        }
    }

    /// Stop counting and freeze the elapsed time; no-op if stopped
    pub fn stop(&mut self, now_ms: u32) {
        if let RunState::Running { started_ms } = self.state {
            self.accumulated_ms = self
                .accumulated_ms
                .saturating_add(now_ms.wrapping_sub(started_ms));
            self.state = RunState::Stopped;
        }
    }

    /// Start if stopped, stop if running
    pub fn toggle(&mut self, now_ms: u32) {
        match self.state {
            RunState::Stopped => self.start(now_ms),
            RunState::Running { .. } => self.stop(now_ms),
        }
    }

    /// Zero the elapsed time and stop, whatever the current state
    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
        self.state = RunState::Stopped;
    }

    /// Elapsed milliseconds at `now_ms`
    pub fn elapsed_ms(&self, now_ms: u32) -> u32 {
        match self.state {
            RunState::Stopped => self.accumulated_ms,
            RunState::Running { started_ms } => self
                .accumulated_ms
                .saturating_add(now_ms.wrapping_sub(started_ms)),
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running { .. })
    }

    pub fn state(&self) -> RunState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_stopped_at_zero() {
        let watch = Stopwatch::new();
        assert!(!watch.is_running());
        assert_eq!(watch.elapsed_ms(12_345), 0);
    }

    #[test]
    fn test_accumulates_across_spans() {
        let mut watch = Stopwatch::new();
        watch.start(1_000);
        assert_eq!(watch.elapsed_ms(1_500), 500);
        watch.stop(2_000);

        // Paused time does not count
        assert_eq!(watch.elapsed_ms(10_000), 1_000);

        watch.start(10_000);
        assert_eq!(watch.elapsed_ms(10_250), 1_250);
    }

    #[test]
    fn test_start_then_stop_without_time_is_unchanged() {
        let mut watch = Stopwatch::new();
        watch.start(0);
        watch.stop(4_200);

        watch.toggle(5_000);
        watch.toggle(5_000);
        assert!(!watch.is_running());
        assert_eq!(watch.elapsed_ms(9_000), 4_200);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut watch = Stopwatch::new();
        watch.start(0);
        watch.reset();
        assert_eq!(watch.state(), RunState::Stopped);
        assert_eq!(watch.elapsed_ms(1_000_000), 0);

        watch.start(0);
        watch.stop(500);
        watch.reset();
        assert_eq!(watch.elapsed_ms(1_000), 0);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut watch = Stopwatch::new();
        watch.start(100);
        watch.start(900);
        assert_eq!(watch.state(), RunState::Running { started_ms: 100 });
    }

    #[test]
    fn test_running_across_clock_wrap() {
        let mut watch = Stopwatch::new();
        watch.start(u32::MAX - 99);
        assert_eq!(watch.elapsed_ms(100), 200);
    }

    #[test]
    fn test_callbacks_drive_state() {
        let callbacks = Stopwatch::callbacks();
        let mut watch = Stopwatch::new();
        (callbacks.start_stop)(&mut watch, 0);
        assert!(watch.is_running());
        (callbacks.reset)(&mut watch, 50);
        assert!(!watch.is_running());
        assert_eq!(watch.elapsed_ms(100), 0);
    }
}
