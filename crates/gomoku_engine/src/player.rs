//! Player identity.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A participant, identified by display name.
///
/// Immutable once constructed; the engine owns both players for the
/// lifetime of a match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
}

impl Player {
    /// Creates a player with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_name() {
        let player = Player::new("Alex");
        assert_eq!(player.name(), "Alex");
        assert_eq!(player.to_string(), "Alex");
    }
}
