//! User configuration.
//!
//! Loaded from `config.toml` in the platform config directory
//! (`~/.config/trackplay/` on Linux). Missing file or missing fields
//! fall back to defaults, so a fresh install needs no setup.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Autoplay advance period in milliseconds.
    pub tick_interval_ms: u64,
    /// Unit label the player appends to speed values.
    pub speed_unit: String,
    /// Unit label the player appends to altitude values.
    pub altitude_unit: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            speed_unit: "km/h".to_string(),
            altitude_unit: "m".to_string(),
        }
    }
}

impl Config {
    /// Path to the config file.
    ///
    /// # Errors
    /// Fails when the platform config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("could not determine config directory")?;
        Ok(dir.join("trackplay").join("config.toml"))
    }

    /// Load the config, or defaults when no file exists.
    ///
    /// # Errors
    /// Fails on an unreadable or syntactically invalid config file.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Write the config to its default location, creating the directory.
    ///
    /// # Errors
    /// Fails on serialization or filesystem errors.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)
            .with_context(|| format!("failed to write config: {}", path.display()))
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_behavior() {
        let config = Config::default();
        assert_eq!(config.tick_interval_ms, 100);
        assert_eq!(config.speed_unit, "km/h");
        assert_eq!(config.altitude_unit, "m");
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn toml_round_trip() {
        let config = Config {
            tick_interval_ms: 250,
            speed_unit: "kn".to_string(),
            altitude_unit: "ft".to_string(),
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let parsed: Config = toml::from_str("tick_interval_ms = 50\n").unwrap();
        assert_eq!(parsed.tick_interval_ms, 50);
        assert_eq!(parsed.speed_unit, "km/h");
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed, Config::default());
    }
}
