//! Configuration schema definitions

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};

use crate::mapping::{Algorithm, PitchRange, Session, VoiceMode};
use crate::pitch::Scale;

/// Main configuration for Gliss
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GlissConfig {
    /// MIDI output settings
    #[serde(default)]
    pub midi: MidiConfig,

    /// Playable pitch range
    #[serde(default)]
    pub range: RangeConfig,

    /// Gesture mapping settings
    #[serde(default)]
    pub mapping: MappingConfig,
}

impl GlissConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.midi.channel > 15 {
            bail!("MIDI channel must be between 0 and 15");
        }
        if self.midi.modulation_channel > 15 {
            bail!("Modulation channel must be between 0 and 15");
        }
        if self.midi.modulation_cc > 127 {
            bail!("Modulation controller number must be between 0 and 127");
        }

        PitchRange::new(self.range.low, self.range.high)?;

        if let Some(name) = &self.mapping.scale {
            if Scale::from_name(name, self.range.low).is_none() {
                bail!("Unknown scale '{}'", name);
            }
        }

        Ok(())
    }

    /// Build a playing session from this configuration.
    pub fn session(&self) -> Result<Session> {
        let range = PitchRange::new(self.range.low, self.range.high)?;
        let mut session = Session::new(range)
            .with_algorithm(self.mapping.algorithm)
            .with_mode(self.mapping.mode)
            .with_channels(self.midi.channel, self.midi.modulation_channel);

        if let Some(name) = &self.mapping.scale {
            // Scales are rooted at the low end of the range.
            let scale = Scale::from_name(name, self.range.low)
                .ok_or_else(|| anyhow!("Unknown scale '{}'", name))?;
            session = session.with_scale(scale);
        }

        Ok(session)
    }
}

/// MIDI output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MidiConfig {
    /// Output port name substring (None = first available)
    pub port: Option<String>,

    /// Channel for note events (default: 0)
    #[serde(default)]
    pub channel: u8,

    /// Channel for modulation control changes (default: 1)
    #[serde(default = "default_modulation_channel")]
    pub modulation_channel: u8,

    /// Controller number for modulation (default: 1, the mod wheel)
    #[serde(default = "default_modulation_cc")]
    pub modulation_cc: u8,
}

impl Default for MidiConfig {
    fn default() -> Self {
        Self {
            port: None,
            channel: 0,
            modulation_channel: default_modulation_channel(),
            modulation_cc: default_modulation_cc(),
        }
    }
}

fn default_modulation_channel() -> u8 {
    1
}
fn default_modulation_cc() -> u8 {
    1
}

/// Pitch range configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeConfig {
    /// MIDI note at the left edge (default: 36 = C2)
    #[serde(default = "default_low")]
    pub low: i32,

    /// MIDI note at the right edge (default: 84 = C6)
    #[serde(default = "default_high")]
    pub high: i32,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            low: default_low(),
            high: default_high(),
        }
    }
}

fn default_low() -> i32 {
    36
}
fn default_high() -> i32 {
    84
}

/// Gesture mapping configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MappingConfig {
    /// Axis-to-pitch algorithm (default: logarithmic)
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Voice mode (default: one_voice)
    #[serde(default)]
    pub mode: VoiceMode,

    /// Scale name to quantize to, rooted at the low bound (None = chromatic)
    pub scale: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GlissConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.midi.channel, 0);
        assert_eq!(config.midi.modulation_channel, 1);
        assert_eq!(config.range.low, 36);
        assert_eq!(config.range.high, 84);
        assert_eq!(config.mapping.algorithm, Algorithm::Logarithmic);
        assert_eq!(config.mapping.mode, VoiceMode::OneVoice);
        assert!(config.mapping.scale.is_none());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "range:\n  low: 48\n";
        let config: GlissConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.range.low, 48);
        assert_eq!(config.range.high, 84); // default
        assert_eq!(config.midi.modulation_cc, 1); // default
    }

    #[test]
    fn test_mapping_yaml() {
        let yaml = r#"
mapping:
  algorithm: linear
  mode: rapid_fire
  scale: minor_pentatonic
"#;
        let config: GlissConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.mapping.algorithm, Algorithm::Linear);
        assert_eq!(config.mapping.mode, VoiceMode::RapidFire);
        assert_eq!(config.mapping.scale.as_deref(), Some("minor_pentatonic"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_channel() {
        let mut config = GlissConfig::default();
        config.midi.channel = 16;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_range() {
        let mut config = GlissConfig::default();
        config.range.low = 90;
        assert!(config.validate().is_err());

        config.range.low = 36;
        config.range.high = 121;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_scale() {
        let mut config = GlissConfig::default();
        config.mapping.scale = Some("klingon".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_session_from_config() {
        let mut config = GlissConfig::default();
        config.mapping.scale = Some("major".to_string());
        config.midi.channel = 2;

        let session = config.session().unwrap();
        assert_eq!(session.range().low(), 36);
        assert_eq!(session.range().high(), 84);
        assert!(session.quantized());
    }
}
