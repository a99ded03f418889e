//! Axis-position mapping functions

use serde::{Deserialize, Serialize};

use super::PitchRange;
use crate::pitch;

/// Interpolation method between the two range endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Interpolate in frequency: equal surface distance covers an equal
    /// musical interval anywhere on the tablet.
    #[default]
    Logarithmic,
    /// Interpolate in note numbers: equal surface distance covers an
    /// equal note step, so pitch moves faster near the low end.
    Linear,
}

impl Algorithm {
    /// The other of the two algorithms.
    pub fn flipped(self) -> Self {
        match self {
            Algorithm::Logarithmic => Algorithm::Linear,
            Algorithm::Linear => Algorithm::Logarithmic,
        }
    }
}

fn lerp(left: f64, right: f64, amount: f64) -> f64 {
    amount * (right - left) + left
}

/// Map a horizontal axis position to a MIDI note within `range`.
///
/// `axis` is expected in [0,1]; callers clamp at the input boundary.
pub fn map_axis_to_note(axis: f64, range: &PitchRange, algorithm: Algorithm) -> i32 {
    let left_freq = pitch::note_to_freq(range.low());
    let right_freq = pitch::note_to_freq(range.high());
    match algorithm {
        Algorithm::Logarithmic => {
            pitch::key_to_note(pitch::freq_to_key(lerp(left_freq, right_freq, axis)))
        }
        Algorithm::Linear => {
            let left = pitch::key_to_note(pitch::freq_to_key(left_freq)) as f64;
            let right = pitch::key_to_note(pitch::freq_to_key(right_freq)) as f64;
            // Truncates toward zero, unlike the floor on the logarithmic path.
            lerp(left, right, axis) as i32
        }
    }
}

/// Map an axis position in [0,1] to a 7-bit MIDI value.
///
/// Shared by pressure-to-velocity and Y-to-modulation; the two uses are
/// independent calls on different axes.
pub fn axis_to_velocity(axis: f64) -> u8 {
    (127.0 * axis).round().clamp(0.0, 127.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c2_to_c6() -> PitchRange {
        PitchRange::new(36, 84).unwrap()
    }

    #[test]
    fn test_logarithmic_endpoints() {
        let range = c2_to_c6();
        assert_eq!(map_axis_to_note(0.0, &range, Algorithm::Logarithmic), 36);
        assert_eq!(map_axis_to_note(1.0, &range, Algorithm::Logarithmic), 84);
    }

    #[test]
    fn test_linear_endpoints() {
        let range = c2_to_c6();
        assert_eq!(map_axis_to_note(0.0, &range, Algorithm::Linear), 36);
        assert_eq!(map_axis_to_note(1.0, &range, Algorithm::Linear), 84);
    }

    #[test]
    fn test_linear_midpoint() {
        let range = c2_to_c6();
        // Halfway across 36..84 in note space is exactly 60.
        assert_eq!(map_axis_to_note(0.5, &range, Algorithm::Linear), 60);
    }

    #[test]
    fn test_logarithmic_midpoint_above_linear() {
        // Frequency interpolation spends more of the surface on the high
        // octaves, so the midpoint note sits above the linear midpoint.
        let range = c2_to_c6();
        assert_eq!(map_axis_to_note(0.5, &range, Algorithm::Logarithmic), 73);
        assert_eq!(map_axis_to_note(0.25, &range, Algorithm::Logarithmic), 62);
    }

    #[test]
    fn test_both_algorithms_stay_in_range() {
        let range = c2_to_c6();
        for i in 0..=100 {
            let axis = i as f64 / 100.0;
            for algorithm in [Algorithm::Logarithmic, Algorithm::Linear] {
                let note = map_axis_to_note(axis, &range, algorithm);
                assert!((36..=84).contains(&note), "axis {} -> {}", axis, note);
            }
        }
    }

    #[test]
    fn test_algorithm_flipped() {
        assert_eq!(Algorithm::Logarithmic.flipped(), Algorithm::Linear);
        assert_eq!(Algorithm::Linear.flipped(), Algorithm::Logarithmic);
    }

    #[test]
    fn test_velocity_endpoints() {
        assert_eq!(axis_to_velocity(0.0), 0);
        assert_eq!(axis_to_velocity(1.0), 127);
        assert_eq!(axis_to_velocity(0.5), 64);
        assert_eq!(axis_to_velocity(0.8), 102);
    }

    #[test]
    fn test_velocity_monotonic_and_bounded() {
        let mut previous = 0;
        for i in 0..=1000 {
            let velocity = axis_to_velocity(i as f64 / 1000.0);
            assert!(velocity <= 127);
            assert!(velocity >= previous);
            previous = velocity;
        }
    }

    #[test]
    fn test_velocity_clamps_out_of_range() {
        assert_eq!(axis_to_velocity(-0.5), 0);
        assert_eq!(axis_to_velocity(1.5), 127);
    }
}
