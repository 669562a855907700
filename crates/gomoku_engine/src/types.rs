//! Core domain types for the engine.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// One of the two competing sides.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Side {
    /// Moves first.
    Side1,
    /// Moves second.
    Side2,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Side1 => Side::Side2,
            Side::Side2 => Side::Side1,
        }
    }

    /// Returns the cell mark this side places.
    pub fn mark(self) -> CellMark {
        match self {
            Side::Side1 => CellMark::Side1,
            Side::Side2 => CellMark::Side2,
        }
    }

    /// Returns the terminal status recorded when this side wins.
    pub fn won(self) -> GameStatus {
        match self {
            Side::Side1 => GameStatus::Side1Won,
            Side::Side2 => GameStatus::Side2Won,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Side::Side1 => 0,
            Side::Side2 => 1,
        }
    }
}

/// Content of a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellMark {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Occupied by [`Side::Side1`].
    Side1,
    /// Occupied by [`Side::Side2`].
    Side2,
}

impl CellMark {
    /// Returns the owning side, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            CellMark::Empty => None,
            CellMark::Side1 => Some(Side::Side1),
            CellMark::Side2 => Some(Side::Side2),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == CellMark::Empty
    }
}

/// Current status of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    #[default]
    InProgress,
    /// Side 1 completed a run.
    Side1Won,
    /// Side 2 completed a run.
    Side2Won,
    /// Board filled with no run.
    Draw,
}

impl GameStatus {
    /// Returns true once no further placements are permitted.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::Side1Won => Some(Side::Side1),
            GameStatus::Side2Won => Some(Side::Side2),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

/// Endpoints of a winning run, as `(x, y)` pairs.
///
/// `start` and `end` are exactly `win_length - 1` steps apart along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Strike {
    /// First cell of the run in scan order.
    pub start: (usize, usize),
    /// Last cell of the run in scan order.
    pub end: (usize, usize),
}

impl Strike {
    /// Returns every cell of the run from `start` to `end`.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let (x0, y0) = (self.start.0 as isize, self.start.1 as isize);
        let (x1, y1) = (self.end.0 as isize, self.end.1 as isize);
        let (dx, dy) = ((x1 - x0).signum(), (y1 - y0).signum());
        let steps = (x1 - x0).abs().max((y1 - y0).abs());

        (0..=steps)
            .map(|i| ((x0 + i * dx) as usize, (y0 + i * dy) as usize))
            .collect()
    }
}

/// A non-empty cell, as reported by
/// [`GameEngine::not_empty_fields`](crate::GameEngine::not_empty_fields).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Field {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
    /// Occupying mark (never [`CellMark::Empty`]).
    pub mark: CellMark,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Side1.opponent(), Side::Side2);
        assert_eq!(Side::Side2.opponent(), Side::Side1);
    }

    #[test]
    fn test_side_mark_round_trips_through_cell() {
        for side in Side::iter() {
            assert_eq!(side.mark().side(), Some(side));
            assert_eq!(side.won().winner(), Some(side));
        }
        assert_eq!(CellMark::Empty.side(), None);
    }

    #[test]
    fn test_status_terminal() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Side1Won.is_terminal());
        assert!(GameStatus::Side2Won.is_terminal());
        assert!(GameStatus::Draw.is_terminal());
        assert_eq!(GameStatus::Draw.winner(), None);
    }

    #[test]
    fn test_strike_cells_diagonal_up() {
        let strike = Strike::new((1, 3), (3, 1));
        assert_eq!(strike.cells(), vec![(1, 3), (2, 2), (3, 1)]);
    }

    #[test]
    fn test_strike_cells_vertical() {
        let strike = Strike::new((0, 0), (0, 2));
        assert_eq!(strike.cells(), vec![(0, 0), (0, 1), (0, 2)]);
    }
}
