//! Square board storage.

use super::settings::check_size;
use super::{CellMark, EngineError, Field};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Fixed-size square grid of cell marks.
///
/// Cells are addressed by `(x, y)`: `x` is the column, `y` the row.
/// The board applies no occupancy rule; that belongs to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// Cells in column-major order (`x * size + y`).
    cells: Vec<CellMark>,
}

impl Board {
    /// Creates an empty board of side `size`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] if `size` is outside `[3, 20]`.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, EngineError> {
        check_size(size)?;
        Ok(Self {
            size,
            cells: vec![CellMark::Empty; size * size],
        })
    }

    /// Returns the board side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Checks if `(x, y)` lies on the board.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, EngineError> {
        if !self.contains(x, y) {
            return Err(EngineError::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        Ok(x * self.size + y)
    }

    /// Gets the mark at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<CellMark, EngineError> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    /// Overwrites the mark at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, mark: CellMark) -> Result<(), EngineError> {
        let idx = self.index(x, y)?;
        self.cells[idx] = mark;
        Ok(())
    }

    /// Gets the mark at a signed coordinate, `None` when off the board.
    pub(crate) fn mark_at(&self, x: isize, y: isize) -> Option<CellMark> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.get(x, y).ok()
    }

    /// Counts empty cells.
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Collects every occupied cell, `x` ascending then `y` ascending.
    pub fn non_empty(&self) -> Vec<Field> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| !mark.is_empty())
            .map(|(idx, mark)| Field::new(idx / self.size, idx % self.size, *mark))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4).unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.count_empty(), 16);
        assert!(board.non_empty().is_empty());
    }

    #[test]
    fn test_new_rejects_bad_size() {
        assert!(matches!(
            Board::new(2),
            Err(EngineError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            Board::new(21),
            Err(EngineError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_set_is_total_overwrite() {
        let mut board = Board::new(3).unwrap();
        board.set(1, 2, CellMark::Side1).unwrap();
        board.set(1, 2, CellMark::Side2).unwrap();
        assert_eq!(board.get(1, 2).unwrap(), CellMark::Side2);
        assert_eq!(board.count_empty(), 8);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut board = Board::new(3).unwrap();
        assert_eq!(
            board.get(3, 0),
            Err(EngineError::OutOfBounds {
                x: 3,
                y: 0,
                size: 3,
            })
        );
        assert!(board.set(0, 3, CellMark::Side1).is_err());
    }

    #[test]
    fn test_mark_at_off_board() {
        let mut board = Board::new(3).unwrap();
        board.set(0, 0, CellMark::Side1).unwrap();
        assert_eq!(board.mark_at(0, 0), Some(CellMark::Side1));
        assert_eq!(board.mark_at(-1, 0), None);
        assert_eq!(board.mark_at(0, 3), None);
    }

    #[test]
    fn test_non_empty_order() {
        let mut board = Board::new(3).unwrap();
        board.set(2, 0, CellMark::Side2).unwrap();
        board.set(0, 2, CellMark::Side1).unwrap();
        board.set(0, 1, CellMark::Side2).unwrap();
        assert_eq!(
            board.non_empty(),
            vec![
                Field::new(0, 1, CellMark::Side2),
                Field::new(0, 2, CellMark::Side1),
                Field::new(2, 0, CellMark::Side2),
            ]
        );
    }
}
