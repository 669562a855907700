//! Match settings validation.

use super::{EngineError, Player};
use tracing::{debug, instrument};

/// Smallest supported board side.
pub const MIN_SIZE: usize = 3;

/// Largest supported board side.
pub const MAX_SIZE: usize = 20;

/// Shortest run that can win a match.
pub const MIN_WIN_LENGTH: usize = 3;

/// Checks that `size` is a supported board side.
pub(crate) fn check_size(size: usize) -> Result<(), EngineError> {
    if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
        return Err(EngineError::invalid_configuration(
            "the size of the board can only be in the range of 3x3 to 20x20 squares",
        ));
    }
    Ok(())
}

/// Checks that `win_length` fits on a board of side `size`.
pub(crate) fn check_win_length(size: usize, win_length: usize) -> Result<(), EngineError> {
    if !(MIN_WIN_LENGTH..=size).contains(&win_length) {
        return Err(EngineError::invalid_configuration(
            "the number of markers in a consecutive row to win can only be in the range of 3 to the length of the board",
        ));
    }
    Ok(())
}

/// Validates match settings without constructing an engine.
///
/// Applies exactly the rules [`GameEngine::new`](crate::GameEngine::new)
/// applies, so a settings editor can reject input before committing it.
///
/// # Errors
///
/// Returns [`EngineError::InvalidConfiguration`] if `size` is outside
/// `[3, 20]` or `win_length` is outside `[3, size]`.
#[instrument(skip(p1, p2), fields(p1 = %p1, p2 = %p2))]
pub fn validate_settings(
    p1: &Player,
    p2: &Player,
    size: usize,
    win_length: usize,
) -> Result<(), EngineError> {
    check_size(size)?;
    check_win_length(size, win_length)?;
    debug!("Settings valid");
    Ok(())
}
