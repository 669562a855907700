//! Match preferences: player names, board size and win length.

use derive_getters::Getters;
use derive_more::{Display, Error};
use gomoku_engine::{EngineError, Player, validate_settings};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Longest accepted player name, in characters.
pub const MAX_NAME_LEN: usize = 16;

/// Preferences used to start a new match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Preferences {
    /// Name of the side moving first.
    #[serde(default = "default_player1")]
    player1: String,

    /// Name of the side moving second.
    #[serde(default = "default_player2")]
    player2: String,

    /// Board side.
    #[serde(default = "default_size")]
    size: usize,

    /// Run length needed to win.
    #[serde(default = "default_win_length")]
    win_length: usize,
}

fn default_player1() -> String {
    "Player 1".to_string()
}

fn default_player2() -> String {
    "Player 2".to_string()
}

fn default_size() -> usize {
    15
}

fn default_win_length() -> usize {
    5
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            player1: default_player1(),
            player2: default_player2(),
            size: default_size(),
            win_length: default_win_length(),
        }
    }
}

impl Preferences {
    /// Loads preferences from a TOML file.
    ///
    /// A missing file yields the defaults. Names longer than
    /// [`MAX_NAME_LEN`] are replaced by the default name.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("Preferences file not found, using defaults");
            return Ok(Self::default());
        }

        debug!("Loading preferences from file");
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read preferences: {}", e)))?;

        let mut prefs: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse preferences: {}", e)))?;
        prefs.sanitize_names();

        info!(
            player1 = %prefs.player1,
            player2 = %prefs.player2,
            size = prefs.size,
            win_length = prefs.win_length,
            "Preferences loaded"
        );
        Ok(prefs)
    }

    /// Writes preferences to a TOML file after validating them.
    ///
    /// Invalid settings are never written.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        self.validate()?;

        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize preferences: {}", e)))?;
        std::fs::write(path.as_ref(), content)
            .map_err(|e| ConfigError::new(format!("Failed to write preferences: {}", e)))?;

        info!("Preferences saved");
        Ok(())
    }

    /// Applies command-line overrides; `None` keeps the current value.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        player1: Option<String>,
        player2: Option<String>,
        size: Option<usize>,
        win_length: Option<usize>,
    ) -> Self {
        if let Some(name) = player1 {
            self.player1 = name;
        }
        if let Some(name) = player2 {
            self.player2 = name;
        }
        if let Some(size) = size {
            self.size = size;
        }
        if let Some(win_length) = win_length {
            self.win_length = win_length;
        }
        self.sanitize_names();
        self
    }

    /// Builds the two players.
    pub fn players(&self) -> (Player, Player) {
        (Player::new(&self.player1), Player::new(&self.player2))
    }

    /// Checks the board size and win length against the engine rules.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (p1, p2) = self.players();
        validate_settings(&p1, &p2, self.size, self.win_length)?;
        Ok(())
    }

    fn sanitize_names(&mut self) {
        if self.player1.chars().count() > MAX_NAME_LEN {
            warn!(name = %self.player1, "Player 1 name too long, reset to default");
            self.player1 = default_player1();
        }
        if self.player2.chars().count() > MAX_NAME_LEN {
            warn!(name = %self.player2, "Player 2 name too long, reset to default");
            self.player2 = default_player2();
        }
    }
}

/// Preferences error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<EngineError> for ConfigError {
    #[track_caller]
    fn from(err: EngineError) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let prefs = Preferences::default();
        assert_eq!(prefs.player1(), "Player 1");
        assert_eq!(*prefs.size(), 15);
        assert_eq!(*prefs.win_length(), 5);
        assert!(prefs.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let prefs: Preferences = toml::from_str("size = 10\n").unwrap();
        assert_eq!(*prefs.size(), 10);
        assert_eq!(*prefs.win_length(), 5);
        assert_eq!(prefs.player2(), "Player 2");
    }

    #[test]
    fn test_overrides_and_name_limit() {
        let prefs = Preferences::default().with_overrides(
            Some("Alex".to_string()),
            Some("a name far beyond sixteen".to_string()),
            Some(3),
            Some(3),
        );
        assert_eq!(prefs.player1(), "Alex");
        assert_eq!(prefs.player2(), "Player 2");
        assert_eq!(*prefs.size(), 3);
    }

    #[test]
    fn test_invalid_win_length_rejected() {
        let prefs = Preferences::default().with_overrides(None, None, Some(4), Some(5));
        let err = prefs.validate().unwrap_err();
        assert!(err.message.contains("consecutive row"));
    }

    #[test]
    fn test_validate_error_points_at_config() {
        let prefs = Preferences::default().with_overrides(None, None, Some(2), None);
        let err = prefs.validate().unwrap_err();
        assert!(err.file.ends_with("config.rs"), "located in {}", err.file);
        assert!(err.line > 0);
    }
}
