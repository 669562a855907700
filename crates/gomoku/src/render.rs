//! Text rendering of the board.

use gomoku_engine::{CellMark, GameEngine, Strike};

/// Symbol drawn for a cell mark: circle for the first side, cross for the second.
pub fn symbol(mark: CellMark) -> char {
    match mark {
        CellMark::Empty => '.',
        CellMark::Side1 => 'O',
        CellMark::Side2 => 'X',
    }
}

/// Renders the board with column indices on top and row indices on the left.
///
/// The grid is rebuilt from [`GameEngine::not_empty_fields`]; cells on
/// `strike` are drawn bracketed.
pub fn render_board(game: &GameEngine, strike: Option<&Strike>) -> String {
    let size = game.size();
    let mut grid = vec![vec![CellMark::Empty; size]; size];
    for field in game.not_empty_fields() {
        grid[field.y][field.x] = field.mark;
    }
    let highlighted = strike.map(Strike::cells).unwrap_or_default();

    let mut out = String::from("  ");
    for x in 0..size {
        out.push_str(&format!("{:>3}", x));
    }
    out.push('\n');

    for (y, row) in grid.iter().enumerate() {
        out.push_str(&format!("{:>2}", y));
        for (x, mark) in row.iter().enumerate() {
            if highlighted.contains(&(x, y)) {
                out.push_str(&format!("[{}]", symbol(*mark)));
            } else {
                out.push_str(&format!(" {} ", symbol(*mark)));
            }
        }
        out.push('\n');
    }
    out
}
