//! Performance session state and event generation

use serde::{Deserialize, Serialize};

use super::{axis_to_velocity, map_axis_to_note, Algorithm, OctaveShift, PitchRange};
use crate::pitch::Scale;

/// Modulation wheel value sent when the stylus lifts off.
const MODULATION_RESET: u8 = 1;

/// How repeated samples on the same note retrigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VoiceMode {
    /// Retrigger a fresh note on every sample, even on the same pitch.
    RapidFire,
    /// Hold the note while the pitch is unchanged and send aftertouch
    /// updates instead of retriggering.
    #[default]
    OneVoice,
}

/// One normalized stylus reading.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub pressure: f64,
}

impl Sample {
    /// Create a sample, clamping each axis into [0,1].
    pub fn new(x: f64, y: f64, pressure: f64) -> Self {
        Self {
            x: x.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0),
            pressure: pressure.clamp(0.0, 1.0),
        }
    }
}

/// A performance-control event bound for the MIDI transport.
///
/// Note events play on the session's note channel, assigned by the
/// transport; control changes carry their channel explicitly because the
/// session routes modulation to a separate channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    NoteOn { note: u8, velocity: u8 },
    NoteOff { note: u8 },
    Aftertouch { value: u8 },
    ControlChange { channel: u8, value: u8 },
}

/// A playing session: pitch range, mapping algorithm, voice mode,
/// optional quantization scale, and the currently sounding note.
///
/// `previous_note` is `Some` exactly while a note-on has been emitted
/// without a matching note-off.
#[derive(Debug, Clone)]
pub struct Session {
    range: PitchRange,
    algorithm: Algorithm,
    mode: VoiceMode,
    scale: Option<Scale>,
    channel: u8,
    modulation_channel: u8,
    previous_note: Option<i32>,
}

fn data7(value: i32) -> u8 {
    value.clamp(0, 127) as u8
}

impl Session {
    /// Create a session over `range` with the default algorithm and
    /// mode, no quantization, notes on channel 0 and modulation on
    /// channel 1.
    pub fn new(range: PitchRange) -> Self {
        Self {
            range,
            algorithm: Algorithm::default(),
            mode: VoiceMode::default(),
            scale: None,
            channel: 0,
            modulation_channel: 1,
            previous_note: None,
        }
    }

    /// Set the mapping algorithm (builder pattern)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the voice mode (builder pattern)
    pub fn with_mode(mut self, mode: VoiceMode) -> Self {
        self.mode = mode;
        self
    }

    /// Quantize pitches to a scale (builder pattern)
    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Set the note and modulation channels (builder pattern)
    pub fn with_channels(mut self, channel: u8, modulation_channel: u8) -> Self {
        self.channel = channel;
        self.modulation_channel = modulation_channel;
        self
    }

    /// Handle one stylus sample and return the events to send, in order.
    ///
    /// Note-off always precedes the note-on that replaces it, and the
    /// modulation control change is always last.
    pub fn sample(&mut self, sample: Sample) -> Vec<ControlEvent> {
        let raw_note = map_axis_to_note(sample.x, &self.range, self.algorithm);
        let note = match &self.scale {
            Some(scale) => scale.floor_to(raw_note),
            None => raw_note,
        };
        let velocity = axis_to_velocity(sample.pressure);
        let modulation = axis_to_velocity(sample.y);

        let mut events = Vec::with_capacity(3);
        let retrigger = match self.mode {
            VoiceMode::RapidFire => true,
            VoiceMode::OneVoice => self.previous_note != Some(note),
        };
        if retrigger {
            if let Some(previous) = self.previous_note {
                events.push(ControlEvent::NoteOff {
                    note: data7(previous),
                });
            }
            events.push(ControlEvent::NoteOn {
                note: data7(note),
                velocity,
            });
            self.previous_note = Some(note);
        } else {
            events.push(ControlEvent::Aftertouch { value: velocity });
        }
        events.push(ControlEvent::ControlChange {
            channel: self.modulation_channel,
            value: modulation,
        });
        events
    }

    /// Handle the stylus lifting off the surface.
    ///
    /// Silences the sounding note, if any, and resets the modulation
    /// wheel. The reset goes out on the note channel rather than the
    /// modulation channel; hosts that want the reset heard alongside
    /// live modulation can configure the two channels equal.
    pub fn lift_off(&mut self) -> Vec<ControlEvent> {
        let mut events = Vec::with_capacity(2);
        if let Some(previous) = self.previous_note.take() {
            events.push(ControlEvent::NoteOff {
                note: data7(previous),
            });
        }
        events.push(ControlEvent::ControlChange {
            channel: self.channel,
            value: MODULATION_RESET,
        });
        events
    }

    /// Shift the pitch range one octave. Returns false if the shift
    /// would leave the note domain.
    pub fn shift_octave(&mut self, direction: OctaveShift) -> bool {
        self.range.shift_octave(direction)
    }

    /// Flip between the two mapping algorithms and return the new one.
    pub fn switch_algorithm(&mut self) -> Algorithm {
        self.algorithm = self.algorithm.flipped();
        self.algorithm
    }

    /// Current pitch range.
    pub fn range(&self) -> PitchRange {
        self.range
    }

    /// Current mapping algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Current voice mode.
    pub fn mode(&self) -> VoiceMode {
        self.mode
    }

    /// Whether pitches are quantized to a scale.
    pub fn quantized(&self) -> bool {
        self.scale.is_some()
    }

    /// The note currently sounding, if any.
    pub fn sounding_note(&self) -> Option<i32> {
        self.previous_note
    }
}
