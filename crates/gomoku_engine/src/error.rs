//! Engine error types.

use derive_more::{Display, Error};

/// Error returned by engine operations.
///
/// Declining a move on an occupied cell is not an error; see
/// [`GameEngine::place_mark`](crate::GameEngine::place_mark).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Board size or win length outside the legal range.
    #[display("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Human-readable description of the rejected setting.
        reason: String,
    },

    /// Coordinate outside `[0, size)`.
    #[display("({x}, {y}) is out of board bounds (size {size})")]
    OutOfBounds {
        /// Column.
        x: usize,
        /// Row.
        y: usize,
        /// Board size.
        size: usize,
    },

    /// Placement attempted after the game reached a terminal status.
    #[display("game over")]
    GameOver,
}

impl EngineError {
    /// Creates an [`EngineError::InvalidConfiguration`].
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
