//! Playable pitch range and octave shifting

use thiserror::Error;

use crate::pitch::{NOTE_MAX, NOTE_MIN};

/// Error building a pitch range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("range {low}..{high} must satisfy low < high")]
    Inverted { low: i32, high: i32 },
    #[error("range {low}..{high} outside the note domain 0..=120")]
    OutOfDomain { low: i32, high: i32 },
}

/// Direction for an octave shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OctaveShift {
    Down,
    Up,
}

/// Ordered pair of MIDI notes bounding the playable surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PitchRange {
    low: i32,
    high: i32,
}

impl PitchRange {
    /// Create a range; `low` must sit below `high` and both bounds must
    /// be inside the note domain.
    pub fn new(low: i32, high: i32) -> Result<Self, RangeError> {
        if low >= high {
            return Err(RangeError::Inverted { low, high });
        }
        if low < NOTE_MIN || high > NOTE_MAX {
            return Err(RangeError::OutOfDomain { low, high });
        }
        Ok(Self { low, high })
    }

    /// Low bound (MIDI note mapped to the left edge).
    pub fn low(&self) -> i32 {
        self.low
    }

    /// High bound (MIDI note mapped to the right edge).
    pub fn high(&self) -> i32 {
        self.high
    }

    /// Shift both bounds one octave. Returns false and leaves the range
    /// untouched when a bound would leave the note domain.
    pub fn shift_octave(&mut self, direction: OctaveShift) -> bool {
        let step = match direction {
            OctaveShift::Up => 12,
            OctaveShift::Down => -12,
        };
        let (low, high) = (self.low + step, self.high + step);
        if low < NOTE_MIN || high > NOTE_MAX {
            return false;
        }
        self.low = low;
        self.high = high;
        true
    }
}

impl Default for PitchRange {
    /// C2 through C6.
    fn default() -> Self {
        Self { low: 36, high: 84 }
    }
}
