//! Gesture-to-pitch mapping
//!
//! Turns normalized stylus samples into ordered MIDI control events.

mod axis;
mod range;
mod session;

pub use axis::{axis_to_velocity, map_axis_to_note, Algorithm};
pub use range::{OctaveShift, PitchRange, RangeError};
pub use session::{ControlEvent, Sample, Session, VoiceMode};
