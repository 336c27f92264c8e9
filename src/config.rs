use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::document::DEFAULT_FRAMERATE;

/// Configuration for the library.
/// This module handles loading, validating and saving configuration
/// settings; absent keys fall back to their defaults.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Timing thresholds read by the error-checking rules
    #[serde(default)]
    pub timing: TimingConfig,

    /// Framerate assumed by frame-based codecs without a host hint
    #[serde(rename = "default-framerate", default = "default_framerate")]
    pub default_framerate: f64,
}

/// Tunable thresholds for the error-checking rules
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TimingConfig {
    /// Minimum reading speed; 0 disables the display-time check
    #[serde(rename = "min-characters-per-second", default = "default_min_cps")]
    pub min_characters_per_second: f64,

    /// Maximum characters on one physical line
    #[serde(rename = "max-characters-per-line", default = "default_max_cpl")]
    pub max_characters_per_line: usize,

    /// Minimum gap between consecutive subtitles in milliseconds
    #[serde(rename = "min-gap-between-subtitles", default = "default_min_gap")]
    pub min_gap_between_subtitles: i64,
}

fn default_framerate() -> f64 {
    DEFAULT_FRAMERATE
}

fn default_min_cps() -> f64 {
    5.0
}

fn default_max_cpl() -> usize {
    40
}

fn default_min_gap() -> i64 {
    100
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            min_characters_per_second: default_min_cps(),
            max_characters_per_line: default_max_cpl(),
            min_gap_between_subtitles: default_min_gap(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timing: TimingConfig::default(),
            default_framerate: default_framerate(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a JSON string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Config =
            serde_json::from_str(content).context("Failed to parse configuration JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Write configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize configuration")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.default_framerate <= 0.0 {
            return Err(anyhow!(
                "default-framerate must be positive, got {}",
                self.default_framerate
            ));
        }
        if self.timing.min_characters_per_second < 0.0 {
            return Err(anyhow!(
                "min-characters-per-second must not be negative, got {}",
                self.timing.min_characters_per_second
            ));
        }
        if self.timing.min_gap_between_subtitles < 0 {
            return Err(anyhow!(
                "min-gap-between-subtitles must not be negative, got {}",
                self.timing.min_gap_between_subtitles
            ));
        }
        Ok(())
    }
}
