//! Configuration file support
//!
//! Settings live in `~/.config/arrviz/config.toml` (or the path given with
//! `--config`). Every field has a default, so a missing file or a partial
//! file is fine:
//!
//! ```toml
//! initial_array = [2, 22, 56]
//! log_level = "warn"
//!
//! [playback]
//! interval_ms = 1000
//! min_interval_ms = 50
//! max_interval_ms = 10000
//! ```

use crate::playback::SpeedLimits;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Errors from loading or validating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Array shown when the visualizer starts
    pub initial_array: Vec<i64>,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
    pub playback: PlaybackConfig,
}

/// Autoplay timing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    pub interval_ms: u64,
    pub min_interval_ms: u64,
    pub max_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial_array: vec![2, 22, 56],
            log_level: "warn".to_string(),
            playback: PlaybackConfig::default(),
        }
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            interval_ms: 1000,
            min_interval_ms: 50,
            max_interval_ms: 10_000,
        }
    }
}

impl PlaybackConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn limits(&self) -> SpeedLimits {
        SpeedLimits {
            min: Duration::from_millis(self.min_interval_ms),
            max: Duration::from_millis(self.max_interval_ms),
        }
    }
}

impl Config {
    /// Default location: `<config dir>/arrviz/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("arrviz").join("config.toml"))
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load an explicit file. The file must exist.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from `path` if given, otherwise from the default location.
    /// A missing default file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Config::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let playback = &self.playback;
        if playback.min_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "playback.min_interval_ms must be positive".to_string(),
            ));
        }
        if playback.min_interval_ms > playback.max_interval_ms {
            return Err(ConfigError::Invalid(format!(
                "playback.min_interval_ms ({}) exceeds playback.max_interval_ms ({})",
                playback.min_interval_ms, playback.max_interval_ms
            )));
        }
        if playback.interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "playback.interval_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
