//! Configuration for the focus tracker.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration for the tracker.
///
/// The sample interval and the idle-gap slack form the idle threshold
/// together; they are configured here side by side so they cannot drift
/// apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Time between foreground samples
    #[serde(with = "duration_serde")]
    pub sample_interval: Duration,

    /// Slack beyond the sample interval before a gap counts as idle
    #[serde(with = "duration_serde")]
    pub idle_gap_slack: Duration,

    /// Size of the trailing summary window, in hours
    pub window_hours: u64,

    /// Application names always classified as idle (lock and login screens)
    pub idle_labels: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_interval: Duration::from_secs(1),
            idle_gap_slack: Duration::from_secs(3),
            window_hours: 24,
            idle_labels: vec![
                "loginwindow".to_string(),
                "ScreenSaverEngine".to_string(),
                "LockApp.exe".to_string(),
            ],
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .map_err(|e| ConfigError::IoError(e.to_string()))?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path();

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(&config_path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Get the path to the configuration file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("focus-tally")
            .join("config.json")
    }
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {e}"),
            ConfigError::ParseError(e) => write!(f, "Parse error: {e}"),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Serde support for Duration.
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.sample_interval, Duration::from_secs(1));
        assert_eq!(config.idle_gap_slack, Duration::from_secs(3));
        assert_eq!(config.window_hours, 24);
        assert!(config.idle_labels.contains(&"loginwindow".to_string()));
        assert!(config
            .idle_labels
            .contains(&"ScreenSaverEngine".to_string()));
    }

    #[test]
    fn test_durations_round_trip_as_seconds() {
        let config = Config {
            sample_interval: Duration::from_secs(5),
            idle_gap_slack: Duration::from_secs(7),
            ..Config::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"sample_interval\":5"));

        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.sample_interval, Duration::from_secs(5));
        assert_eq!(parsed.idle_gap_slack, Duration::from_secs(7));
    }
}
