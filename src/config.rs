//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants::library::{DEFAULT_DIR_NAME, MAX_SEARCH_RESULTS};
use crate::error::{Error, Result};

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Directory holding `Artist - Title.lrc` files
    pub lyrics_path: Option<PathBuf>,
    /// Maximum number of library search results
    pub max_results: usize,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            lyrics_path: None,
            max_results: MAX_SEARCH_RESULTS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        // Lyrics path: env var override, or default <audio dir>/Lyrics
        let lyrics_path = env::var("LYRICS_PATH").ok().map_or_else(
            || {
                dirs::audio_dir()
                    .map(|d| d.join(DEFAULT_DIR_NAME))
                    .filter(|p| p.is_dir())
            },
            |path| expand_dir(&path),
        );

        let mut config = Self { lyrics_path, ..Self::default() };

        if let Ok(max) = env::var("LYRICS_MAX_RESULTS") {
            if let Ok(max) = max.parse::<usize>() {
                config.max_results = max;
            }
        }

        Ok(config)
    }

    /// The configured lyrics library, or an error explaining how to set one.
    pub fn require_lyrics_path(&self) -> Result<PathBuf> {
        self.lyrics_path.clone().ok_or_else(|| {
            Error::config(
                "No lyrics library directory found",
                "Set LYRICS_PATH to a directory of `Artist - Title.lrc` files",
            )
        })
    }
}

/// Expand `~` and keep the path only if it is a directory.
fn expand_dir(path: &str) -> Option<PathBuf> {
    let p = PathBuf::from(shellexpand::tilde(path).to_string());
    p.is_dir().then_some(p)
}
