//! Leaderboard error types.
//!
//! The row enricher absorbs its own failures by contract (they degrade
//! to annotation states), so these errors surface only from the config
//! layer and from callers using the registry/metadata APIs directly.

use thiserror::Error;

/// Leaderboard errors.
#[derive(Error, Debug)]
pub enum LeaderboardError {
    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for leaderboard operations
pub type Result<T> = std::result::Result<T, LeaderboardError>;

impl From<toml::de::Error> for LeaderboardError {
    fn from(err: toml::de::Error) -> Self {
        LeaderboardError::Config(err.to_string())
    }
}
