//! Multiplexed 4-digit display
//!
//! Only one digit is lit at a time. Each pass selects a position, drives
//! the segment lines for that position's digit, holds, then deselects.
//! Repeating the pass faster than ~16 ms makes all four digits appear lit.

use embedded_hal::delay::DelayNs;
use lapse_core::config::{DisplayConfig, DIGIT_COUNT, SEGMENT_COUNT};
use lapse_core::StopwatchTime;
use lapse_hal::OutputPin;

use super::table::{segment_pattern, BLANK};

/// Position lit with the decimal point, between minutes and seconds
const SEPARATOR_POSITION: u8 = 1;

/// Display driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Digit position outside 0-3
    InvalidPosition(u8),
}

/// Electrical polarity of the display lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Polarity {
    /// Segment lit = pin LOW (common-anode display)
    pub segments_active_low: bool,
    /// Digit selected = pin LOW (PNP high-side switch)
    pub digits_active_low: bool,
}

impl From<&DisplayConfig> for Polarity {
    fn from(config: &DisplayConfig) -> Self {
        Self {
            segments_active_low: config.segments_active_low,
            digits_active_low: config.digits_active_low,
        }
    }
}

/// 4-digit 7-segment display with multiplexed digit selection
pub struct MuxDisplay<P, D> {
    /// Segment lines A-G
    segments: [P; SEGMENT_COUNT],
    decimal_point: Option<P>,
    /// Digit-select lines, left to right
    digits: [P; DIGIT_COUNT],
    delay: D,
    polarity: Polarity,
    hold_us: u32,
    /// Currently selected position
    active: Option<u8>,
}

impl<P: OutputPin, D: DelayNs> MuxDisplay<P, D> {
    /// Create the driver and blank the display
    pub fn new(
        segments: [P; SEGMENT_COUNT],
        decimal_point: Option<P>,
        digits: [P; DIGIT_COUNT],
        delay: D,
        config: &DisplayConfig,
    ) -> Self {
        let mut display = Self {
            segments,
            decimal_point,
            digits,
            delay,
            polarity: Polarity::from(config),
            hold_us: config.digit_hold_us,
            active: None,
        };
        display.blank();
        display
    }

    /// Select exactly one digit position and deselect the other three
    pub fn mux(&mut self, position: u8) -> Result<(), DisplayError> {
        if position as usize >= DIGIT_COUNT {
            self.deselect_all();
            return Err(DisplayError::InvalidPosition(position));
        }

        // Turn the old digit off before the new one comes on
        for (i, pin) in self.digits.iter_mut().enumerate() {
            if i != position as usize {
                pin.set_state(self.polarity.digits_active_low);
            }
        }
        self.digits[position as usize].set_state(!self.polarity.digits_active_low);
        self.active = Some(position);
        Ok(())
    }

    /// Drive the segment lines to the shape of `digit`
    ///
    /// The position is whatever `mux` selected last. Digits above 9 blank.
    pub fn display_digit(&mut self, digit: u8) {
        let pattern = segment_pattern(digit).unwrap_or(BLANK);
        self.write_segments(pattern);
    }

    /// Light or clear the decimal point, if one is wired
    pub fn set_decimal_point(&mut self, on: bool) {
        let active_low = self.polarity.segments_active_low;
        if let Some(dp) = self.decimal_point.as_mut() {
            dp.set_state(on != active_low);
        }
    }

    /// One full multiplex pass over all four digits
    ///
    /// Each position is selected, rendered, held, then deselected and
    /// blanked. Call once per loop iteration; the display is dark when this
    /// returns.
    pub fn display_stopwatch_time(&mut self, time: &StopwatchTime) -> Result<(), DisplayError> {
        for (position, digit) in time.digits().into_iter().enumerate() {
            let position = position as u8;

            self.mux(position)?;
            self.display_digit(digit);
            self.set_decimal_point(position == SEPARATOR_POSITION);

            self.delay.delay_us(self.hold_us);

            // Back to idle so the next digit starts from a dark display
            self.blank();
        }

        Ok(())
    }

    /// All segments and digit lines off
    pub fn blank(&mut self) {
        self.deselect_all();
        self.write_segments(BLANK);
        self.set_decimal_point(false);
    }

    /// Position selected by the last `mux`, `None` when idle
    pub fn active_digit(&self) -> Option<u8> {
        self.active
    }

    fn deselect_all(&mut self) {
        let off = self.polarity.digits_active_low;
        for pin in self.digits.iter_mut() {
            pin.set_state(off);
        }
        self.active = None;
    }

    fn write_segments(&mut self, pattern: u8) {
        let active_low = self.polarity.segments_active_low;
        for (bit, pin) in self.segments.iter_mut().enumerate() {
            let lit = pattern & (1 << bit) != 0;
            pin.set_state(lit != active_low);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use proptest::prelude::*;

    use crate::seven_segment::SEGMENT_TABLE;

    /// Line indices: 0-6 segments, 7 decimal point, 8-11 digits
    const DP: usize = 7;
    const DIGIT_LINES: core::ops::Range<usize> = 8..12;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Event {
        Set(usize, bool),
        Hold,
    }

    #[derive(Default)]
    struct Lines {
        levels: [bool; 12],
        events: Vec<Event>,
        /// Line levels captured at every hold, with the hold length
        holds: Vec<([bool; 12], u32)>,
    }

    type Bus = Rc<RefCell<Lines>>;

    struct MockPin {
        line: usize,
        bus: Bus,
    }

    impl MockPin {
        fn drive(&mut self, high: bool) {
            let mut bus = self.bus.borrow_mut();
            bus.levels[self.line] = high;
            bus.events.push(Event::Set(self.line, high));
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.drive(true);
        }

        fn set_low(&mut self) {
            self.drive(false);
        }

        fn is_set_high(&self) -> bool {
            self.bus.borrow().levels[self.line]
        }
    }

    struct SnapshotDelay {
        bus: Bus,
    }

    impl SnapshotDelay {
        fn hold(&mut self, us: u32) {
            let mut bus = self.bus.borrow_mut();
            let levels = bus.levels;
            bus.holds.push((levels, us));
            bus.events.push(Event::Hold);
        }
    }

    impl DelayNs for SnapshotDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.hold(ns / 1000);
        }

        fn delay_us(&mut self, us: u32) {
            self.hold(us);
        }
    }

    struct Rig {
        display: MuxDisplay<MockPin, SnapshotDelay>,
        bus: Bus,
    }

    impl Rig {
        fn levels(&self) -> [bool; 12] {
            self.bus.borrow().levels
        }

        fn holds(&self) -> Vec<([bool; 12], u32)> {
            self.bus.borrow().holds.clone()
        }
    }

    fn rig_with(config: &DisplayConfig, decimal_point: bool) -> Rig {
        let bus: Bus = Rc::new(RefCell::new(Lines::default()));
        let pin = |line| MockPin {
            line,
            bus: bus.clone(),
        };
        let display = MuxDisplay::new(
            [pin(0), pin(1), pin(2), pin(3), pin(4), pin(5), pin(6)],
            if decimal_point { Some(pin(DP)) } else { None },
            [pin(8), pin(9), pin(10), pin(11)],
            SnapshotDelay { bus: bus.clone() },
            config,
        );
        Rig { display, bus }
    }

    fn rig(config: &DisplayConfig) -> Rig {
        rig_with(config, true)
    }

    fn segments_of(lines: &[bool; 12], active_low: bool) -> u8 {
        (0..7).fold(0u8, |acc, bit| {
            if lines[bit] != active_low {
                acc | (1 << bit)
            } else {
                acc
            }
        })
    }

    fn selected(lines: &[bool; 12], active_low: bool) -> Vec<usize> {
        (0..4).filter(|d| lines[8 + d] != active_low).collect()
    }

    #[test]
    fn test_new_blanks_display() {
        let config = DisplayConfig {
            segments_active_low: true,
            digits_active_low: true,
            ..DisplayConfig::default()
        };
        let r = rig(&config);
        // Active-low: everything off means every line high
        assert!(r.levels().iter().all(|high| *high));
        assert_eq!(r.display.active_digit(), None);
    }

    #[test]
    fn test_mux_selects_exactly_one() {
        let mut r = rig(&DisplayConfig::default());
        for position in 0..4u8 {
            r.display.mux(position).unwrap();
            assert_eq!(selected(&r.levels(), false), vec![position as usize]);
            assert_eq!(r.display.active_digit(), Some(position));
        }
    }

    #[test]
    fn test_mux_invalid_position_deselects() {
        let mut r = rig(&DisplayConfig::default());
        r.display.mux(2).unwrap();
        assert_eq!(r.display.mux(4), Err(DisplayError::InvalidPosition(4)));
        assert!(selected(&r.levels(), false).is_empty());
        assert_eq!(r.display.active_digit(), None);
    }

    #[test]
    fn test_display_digit_patterns() {
        let mut r = rig(&DisplayConfig::default());
        for digit in 0..10u8 {
            r.display.display_digit(digit);
            assert_eq!(segments_of(&r.levels(), false), SEGMENT_TABLE[digit as usize]);
        }
        r.display.display_digit(42);
        assert_eq!(segments_of(&r.levels(), false), 0);
    }

    #[test]
    fn test_common_anode_inverts_segments() {
        let config = DisplayConfig {
            segments_active_low: true,
            ..DisplayConfig::default()
        };
        let mut r = rig(&config);
        r.display.display_digit(1);
        let lines = r.levels();
        // B and C low, the rest high
        assert_eq!(&lines[..7], &[true, false, false, true, true, true, true]);
    }

    #[test]
    fn test_full_cycle_order_and_exclusion() {
        let config = DisplayConfig::default();
        let mut r = rig(&config);
        let time = StopwatchTime { minutes: 12, seconds: 34 };

        r.display.display_stopwatch_time(&time).unwrap();

        let holds = r.holds();
        assert_eq!(holds.len(), 4);

        let mut active_count = [0u8; 4];
        for (phase, (lines, us)) in holds.iter().enumerate() {
            let active = selected(lines, false);
            assert_eq!(active, vec![phase]);
            active_count[phase] += 1;

            assert_eq!(segments_of(lines, false), SEGMENT_TABLE[phase + 1]);
            assert_eq!(lines[DP], phase == 1, "separator only after minutes");
            assert_eq!(*us, config.digit_hold_us);
        }
        assert_eq!(active_count, [1, 1, 1, 1]);

        // Idle after the pass
        assert!(selected(&r.levels(), false).is_empty());
        assert_eq!(segments_of(&r.levels(), false), 0);
        assert_eq!(r.display.active_digit(), None);
    }

    #[test]
    fn test_each_digit_deselected_after_its_hold() {
        let mut r = rig(&DisplayConfig::default());
        r.display
            .display_stopwatch_time(&StopwatchTime::from_millis(125_000))
            .unwrap();

        let events = r.bus.borrow().events.clone();
        let hold_indices: Vec<usize> = events
            .iter()
            .enumerate()
            .filter(|(_, e)| **e == Event::Hold)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(hold_indices.len(), 4);

        for (phase, &hold) in hold_indices.iter().enumerate() {
            // The first writes after a hold switch every digit line off,
            // before any segment line changes
            let after: Vec<Event> = events[hold + 1..hold + 1 + DIGIT_LINES.len()].to_vec();
            let expected: Vec<Event> = DIGIT_LINES.map(|line| Event::Set(line, false)).collect();
            assert_eq!(after, expected, "phase {}", phase);

            // Next phase selects its digit only after the previous one went dark
            if let Some(&next_hold) = hold_indices.get(phase + 1) {
                let selects: Vec<usize> = events[hold + 1..next_hold]
                    .iter()
                    .filter_map(|e| match e {
                        Event::Set(line, true) if DIGIT_LINES.contains(line) => Some(*line),
                        _ => None,
                    })
                    .collect();
                assert_eq!(selects, vec![8 + phase + 1]);
            }
        }
    }

    #[test]
    fn test_cycle_with_active_low_digits() {
        let config = DisplayConfig {
            digits_active_low: true,
            ..DisplayConfig::default()
        };
        let mut r = rig(&config);
        r.display
            .display_stopwatch_time(&StopwatchTime::from_millis(125_000))
            .unwrap();

        let holds = r.holds();
        for (phase, (lines, _)) in holds.iter().enumerate() {
            assert_eq!(selected(lines, true), vec![phase]);
        }
        let shown: Vec<u8> = holds.iter().map(|(l, _)| segments_of(l, false)).collect();
        assert_eq!(
            shown,
            vec![SEGMENT_TABLE[0], SEGMENT_TABLE[2], SEGMENT_TABLE[0], SEGMENT_TABLE[5]]
        );
    }

    #[test]
    fn test_without_decimal_point() {
        let mut r = rig_with(&DisplayConfig::default(), false);
        r.display
            .display_stopwatch_time(&StopwatchTime::default())
            .unwrap();
        assert!(r.holds().iter().all(|(lines, _)| !lines[DP]));
    }

    proptest! {
        #[test]
        fn prop_each_phase_shows_its_digit(ms in any::<u32>()) {
            let mut r = rig(&DisplayConfig::default());
            let time = StopwatchTime::from_millis(ms);
            r.display.display_stopwatch_time(&time).unwrap();

            let holds = r.holds();
            prop_assert_eq!(holds.len(), 4);
            for (phase, (lines, _)) in holds.iter().enumerate() {
                prop_assert_eq!(selected(lines, false), vec![phase]);
                prop_assert_eq!(
                    segments_of(lines, false),
                    SEGMENT_TABLE[time.digits()[phase] as usize]
                );
            }
        }
    }
}
