//! Draw detection.

use crate::GameStatus;

/// Checks if a match with `empty_count` free cells and `status` is drawn.
///
/// A match already won is never a draw, even on a full board.
pub fn is_draw(empty_count: usize, status: GameStatus) -> bool {
    empty_count == 0 && status == GameStatus::InProgress
}
