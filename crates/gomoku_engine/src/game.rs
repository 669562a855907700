//! Game engine: board, players, turn and status bookkeeping.

use super::settings::{check_size, check_win_length};
use super::{Board, CellMark, EngineError, Field, GameStatus, Player, Side, Strike, rules};
use tracing::{debug, info, instrument, warn};

/// N-in-a-row game engine.
///
/// The engine never advances the turn by itself. After each move the
/// caller runs, in order:
///
/// 1. [`place_mark`](Self::place_mark)
/// 2. [`check_winner`](Self::check_winner), then [`check_draw`](Self::check_draw)
/// 3. [`advance_turn`](Self::advance_turn)
///
/// Checking the winner before the draw makes a board-filling winning
/// move count as a win.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    players: [Player; 2],
    current_side: Side,
    win_length: usize,
    empty_count: usize,
    status: GameStatus,
}

impl GameEngine {
    /// Creates a new match.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] if `size` is outside
    /// `[3, 20]` or `win_length` is outside `[3, size]`.
    #[instrument(skip(p1, p2), fields(p1 = %p1, p2 = %p2))]
    pub fn new(
        p1: Player,
        p2: Player,
        size: usize,
        win_length: usize,
    ) -> Result<Self, EngineError> {
        check_size(size)?;
        check_win_length(size, win_length)?;

        let board = Board::new(size)?;
        info!(size, win_length, "New game");

        Ok(Self {
            board,
            players: [p1, p2],
            current_side: Side::Side1,
            win_length,
            empty_count: size * size,
            status: GameStatus::InProgress,
        })
    }

    /// Places the current side's mark at `(x, y)`.
    ///
    /// Returns `Ok(false)` without changing anything if the cell is
    /// already occupied. Neither the turn nor the status is touched.
    ///
    /// # Errors
    ///
    /// - [`EngineError::OutOfBounds`] if `x` or `y` is not below the board size.
    /// - [`EngineError::GameOver`] if the match already ended.
    #[instrument(skip(self), fields(side = %self.current_side))]
    pub fn place_mark(&mut self, x: usize, y: usize) -> Result<bool, EngineError> {
        let current = self.board.get(x, y)?;

        if self.status.is_terminal() {
            warn!(status = ?self.status, "Placement after game over");
            return Err(EngineError::GameOver);
        }

        if !current.is_empty() {
            debug!(?current, "Cell occupied, move declined");
            return Ok(false);
        }

        self.board.set(x, y, self.current_side.mark())?;
        self.empty_count -= 1;
        debug!(empty = self.empty_count, "Mark placed");
        Ok(true)
    }

    /// Checks for a completed run through the just-played cell `(x, y)`.
    ///
    /// On a win the status becomes the owning side's win state and the
    /// strike endpoints are returned. Returns `None`, leaving the status
    /// unchanged, when there is no run, when `(x, y)` is off the board, or
    /// when the match has already ended.
    #[instrument(skip(self), fields(win_length = self.win_length))]
    pub fn check_winner(&mut self, x: usize, y: usize) -> Option<Strike> {
        if self.status.is_terminal() || !self.board.contains(x, y) {
            return None;
        }

        let (strike, side) = rules::find_strike(&self.board, x, y, self.win_length)?;
        self.status = side.won();
        info!(%side, ?strike, "Game won");
        Some(strike)
    }

    /// Records a draw if the board is full and nobody has won.
    ///
    /// Returns `true` only on the call that records the draw.
    #[instrument(skip(self))]
    pub fn check_draw(&mut self) -> bool {
        if !rules::is_draw(self.empty_count, self.status) {
            return false;
        }

        self.status = GameStatus::Draw;
        info!("Game drawn");
        true
    }

    /// Passes the turn to the other side.
    #[instrument(skip(self), fields(from = %self.current_side))]
    pub fn advance_turn(&mut self) {
        self.current_side = self.current_side.opponent();
    }

    /// Returns the side to move.
    pub fn current_side(&self) -> Side {
        self.current_side
    }

    /// Returns the player of the side to move.
    pub fn current_player(&self) -> &Player {
        self.player(self.current_side)
    }

    /// Returns the player assigned to `side`.
    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    /// Gets the mark at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] if `x` or `y` is not below the board size.
    pub fn field(&self, x: usize, y: usize) -> Result<CellMark, EngineError> {
        self.board.get(x, y)
    }

    /// Returns the board side.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Returns the run length needed to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Returns the number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.empty_count
    }

    /// Returns the match status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Snapshots every occupied cell, `x` ascending then `y` ascending.
    pub fn not_empty_fields(&self) -> Vec<Field> {
        self.board.non_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(size: usize, win_length: usize) -> GameEngine {
        GameEngine::new(Player::new("Alex"), Player::new("Marti"), size, win_length).unwrap()
    }

    #[test]
    fn test_new_game_state() {
        let game = game(5, 4);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_side(), Side::Side1);
        assert_eq!(game.empty_count(), 25);
        assert_eq!(game.size(), 5);
        assert_eq!(game.win_length(), 4);
        assert_eq!(game.player(Side::Side2).name(), "Marti");
        assert_eq!(game.current_player().name(), "Alex");
    }

    #[test]
    fn test_place_mark_does_not_advance_turn() {
        let mut game = game(3, 3);
        assert!(game.place_mark(1, 1).unwrap());
        assert_eq!(game.current_side(), Side::Side1);
        assert_eq!(game.field(1, 1).unwrap(), CellMark::Side1);
        assert_eq!(game.empty_count(), 8);
    }

    #[test]
    fn test_empty_count_tracks_board() {
        let mut game = game(4, 3);
        for (x, y) in [(0, 0), (3, 3), (1, 2), (2, 1)] {
            assert!(game.place_mark(x, y).unwrap());
            game.advance_turn();
            assert_eq!(game.empty_count(), game.board.count_empty());
        }
        assert!(!game.place_mark(1, 2).unwrap());
        assert_eq!(game.empty_count(), game.board.count_empty());
        assert_eq!(game.empty_count(), 12);
    }

    #[test]
    fn test_advance_turn_toggles() {
        let mut game = game(3, 3);
        game.advance_turn();
        assert_eq!(game.current_side(), Side::Side2);
        game.advance_turn();
        assert_eq!(game.current_side(), Side::Side1);
    }

    #[test]
    fn test_out_of_bounds_checked_before_game_over() {
        let mut game = game(3, 3);
        for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.place_mark(x, y).unwrap();
            game.check_winner(x, y);
            game.advance_turn();
        }
        assert!(game.status().is_terminal());
        assert!(matches!(
            game.place_mark(3, 0),
            Err(EngineError::OutOfBounds { .. })
        ));
        assert_eq!(game.place_mark(2, 2), Err(EngineError::GameOver));
    }

    #[test]
    fn test_check_winner_off_board_is_none() {
        let mut game = game(3, 3);
        assert_eq!(game.check_winner(7, 7), None);
        assert_eq!(game.status(), GameStatus::InProgress);
    }
}
