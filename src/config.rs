//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants::{deck, env as keys, quiz};
use crate::error::{Error, Result};
use crate::types::Mode;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Matching mode used when none is given on the command line
    pub mode: Mode,
    /// Attempts per reference before it is revealed
    pub attempts: u32,
    /// Path to the deck file
    pub deck_path: Option<PathBuf>,
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
            mode: Mode::default(),
            attempts: quiz::DEFAULT_ATTEMPTS,
            deck_path: default_deck_path(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(mode) = lookup(keys::MODE) {
            config.mode = mode
                .parse()
                .map_err(|e: String| Error::config(e, "Set VERSEREF_MODE to 'initial' or 'full'"))?;
        }

        if let Some(attempts) = lookup(keys::ATTEMPTS) {
            config.attempts = attempts
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n >= quiz::MIN_ATTEMPTS)
                .ok_or_else(|| {
                    Error::config(
                        format!("VERSEREF_ATTEMPTS is '{attempts}'"),
                        "Set VERSEREF_ATTEMPTS to a whole number of at least 1",
                    )
                })?;
        }

        // Deck path: env var override, or the platform data directory
        if let Some(path) = lookup(keys::DECK) {
            config.deck_path = Some(PathBuf::from(shellexpand::tilde(&path).to_string()));
        }

        Ok(config)
    }

    /// The deck file to read, if one could be located.
    pub fn deck_file(&self) -> Result<PathBuf> {
        self.deck_path.clone().ok_or_else(|| {
            Error::config(
                "no data directory for the deck file",
                "Set VERSEREF_DECK to the path of a deck file",
            )
        })
    }
}

/// `<data_dir>/verseref/deck.json`, when the platform has a data directory.
fn default_deck_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join(deck::APP_DIR).join(deck::DECK_FILE))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.mode, Mode::Initial);
        assert_eq!(config.attempts, 2);
        assert_eq!(config.app_name(), "verseref");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("VERSEREF_MODE", "Full"),
            ("VERSEREF_ATTEMPTS", "3"),
            ("VERSEREF_DECK", "/tmp/refs.json"),
        ])
        .unwrap();
        assert_eq!(config.mode, Mode::Full);
        assert_eq!(config.attempts, 3);
        assert_eq!(config.deck_file().unwrap(), PathBuf::from("/tmp/refs.json"));
    }

    #[test]
    fn test_invalid_mode() {
        match config_from(&[("VERSEREF_MODE", "loose")]) {
            Err(Error::Config { hint, .. }) => assert!(hint.contains("initial")),
            other => panic!("Expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_attempts() {
        assert!(config_from(&[("VERSEREF_ATTEMPTS", "0")]).is_err());
        assert!(config_from(&[("VERSEREF_ATTEMPTS", "two")]).is_err());
    }

    #[test]
    fn test_deck_path_expands_tilde() {
        let config = config_from(&[("VERSEREF_DECK", "~/deck.json")]).unwrap();
        let path = config.deck_path.unwrap();
        assert!(path.ends_with("deck.json"));
        if dirs::home_dir().is_some() {
            assert!(!path.starts_with("~"));
        }
    }
}
