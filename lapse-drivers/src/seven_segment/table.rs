//! Segment lookup table
//!
//! Bit layout is `0bGFEDCBA`:
//!
//! ```text
//!  AAA
//! F   B
//!  GGG
//! E   C
//!  DDD
//! ```

/// Digit 0-9 to segment pattern
pub const SEGMENT_TABLE: [u8; 10] = [
    0x3F, // 0: A B C D E F
    0x06, // 1: B C
    0x5B, // 2: A B D E G
    0x4F, // 3: A B C D G
    0x66, // 4: B C F G
    0x6D, // 5: A C D F G
    0x7D, // 6: A C D E F G
    0x07, // 7: A B C
    0x7F, // 8: all
    0x6F, // 9: A B C D F G
];

/// All segments off
pub const BLANK: u8 = 0x00;

/// Pattern for a decimal digit, `None` for anything above 9
pub fn segment_pattern(digit: u8) -> Option<u8> {
    SEGMENT_TABLE.get(digit as usize).copied()
}
