//! Configuration management.
//!
//! Supports configuration from:
//! - TOML config files
//! - Environment variables

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{LeaderboardError, Result};

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Eval queue configuration
    #[serde(default)]
    pub queue: QueueConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| LeaderboardError::Config(format!("Failed to read config file: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| LeaderboardError::Config(format!("Failed to parse config: {e}")))
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var("LEADERBOARD_QUEUE_DIR") {
            config.queue.dir = PathBuf::from(dir);
        }

        config
    }
}

/// Eval queue directory configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Directory holding `<model>_eval_request_*.json` files
    pub dir: PathBuf,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("eval-queue"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_queue_dir() {
        let config = Config::default();
        assert_eq!(config.queue.dir, PathBuf::from("eval-queue"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[queue]\ndir = \"/srv/requests\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.queue.dir, PathBuf::from("/srv/requests"));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file("/nonexistent/leaderboard.toml").unwrap_err();
        assert!(matches!(err, LeaderboardError::Config(_)));
    }

    #[test]
    fn test_from_file_empty_uses_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.queue.dir, PathBuf::from("eval-queue"));
    }
}
