//! Configuration loading and validation

mod schema;

pub use schema::*;

use anyhow::Result;
use std::path::Path;

/// Load configuration from a YAML file
pub fn load_config(path: &Path) -> Result<GlissConfig> {
    let contents = std::fs::read_to_string(path)?;
    let config: GlissConfig = serde_yaml::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

/// Render the default configuration as YAML.
pub fn example_yaml() -> Result<String> {
    Ok(serde_yaml::to_string(&GlissConfig::default())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_minimal_config() {
        let yaml = r#"
midi:
  channel: 0
  modulation_channel: 1

range:
  low: 36
  high: 84

mapping:
  algorithm: logarithmic
  mode: one_voice
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.range.low, 36);
        assert_eq!(config.midi.modulation_channel, 1);
    }

    #[test]
    fn test_load_rejects_invalid_config() {
        let yaml = "range:\n  low: 84\n  high: 36\n";
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_example_yaml_round_trips() {
        let yaml = example_yaml().unwrap();
        let config: GlissConfig = serde_yaml::from_str(&yaml).unwrap();
        assert!(config.validate().is_ok());
    }
}
