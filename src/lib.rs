//! Gliss - tablet theremin
//!
//! Turns stylus gestures on a tablet surface into MIDI. Horizontal
//! position becomes pitch, pen pressure becomes velocity, vertical
//! position becomes modulation.

pub mod config;
pub mod mapping;
pub mod midi;
pub mod pitch;

pub use config::GlissConfig;
pub use mapping::Session;
