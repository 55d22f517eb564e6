//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Default map zoom level used when centering on a workout or on the
/// user's position.
const DEFAULT_ZOOM_LEVEL: u8 = 13;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the durable workout snapshot file
    pub storage_path: PathBuf,
    /// Map zoom level for centering operations
    pub map_zoom_level: u8,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from("data/workouts.json"),
            map_zoom_level: DEFAULT_ZOOM_LEVEL,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Both values have defaults; a set-but-unparsable zoom level is
    /// rejected rather than silently replaced.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let storage_path = env::var("MAPTRACK_STORAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/workouts.json"));

        let map_zoom_level = match env::var("MAPTRACK_ZOOM_LEVEL") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid("MAPTRACK_ZOOM_LEVEL"))?,
            Err(_) => DEFAULT_ZOOM_LEVEL,
        };

        Ok(Self {
            storage_path,
            map_zoom_level,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
