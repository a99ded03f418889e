//! Piano-key pitch conversions
//!
//! Conversions between frequency, the continuous piano key number, and
//! MIDI note numbers. Key 49 is A4 = 440 Hz; a MIDI note is its key
//! number plus 20 (note 21 = key 1 = A0).

mod scale;

pub use scale::Scale;

/// Lowest MIDI note the mapper will address.
pub const NOTE_MIN: i32 = 0;

/// Highest MIDI note the mapper will address.
///
/// Capped below 127 so a full-octave shift check has headroom.
pub const NOTE_MAX: i32 = 120;

/// Continuous piano key number for a frequency in Hz.
pub fn freq_to_key(freq: f64) -> f64 {
    12.0 * (freq / 440.0).log2() + 49.0
}

/// Frequency in Hz for a continuous piano key number.
pub fn key_to_freq(key: f64) -> f64 {
    440.0 * 2.0_f64.powf((key - 49.0) / 12.0)
}

/// Discrete MIDI note at or below a continuous key number.
pub fn key_to_note(key: f64) -> i32 {
    (key + 20.0).floor() as i32
}

/// Piano key number of a MIDI note.
pub fn note_to_key(note: i32) -> i32 {
    note - 20
}

/// Frequency in Hz of a MIDI note.
pub fn note_to_freq(note: i32) -> f64 {
    key_to_freq(note_to_key(note) as f64)
}
