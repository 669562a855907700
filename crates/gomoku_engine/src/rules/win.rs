//! Win detection around the last move.
//!
//! Only the `2 * win_length - 1` cells centered on the played cell are
//! examined along each axis, so the cost is independent of board size.

use crate::{Board, Side, Strike};
use tracing::{instrument, trace};

/// Axis direction vectors in tie-break order.
pub const AXES: [(isize, isize); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal down
    (1, -1), // Diagonal up
];

/// Finds a run of `win_length` equal marks passing through `(x, y)`.
///
/// Axes are tried in [`AXES`] order and the first completed run is
/// returned together with the side that owns it.
#[instrument(skip(board))]
pub fn find_strike(
    board: &Board,
    x: usize,
    y: usize,
    win_length: usize,
) -> Option<(Strike, Side)> {
    let scan = |axis| scan_axis(board, x, y, win_length, axis);
    AXES.into_iter().find_map(scan)
}

/// Slides over adjacent cell pairs of the window along one axis.
///
/// A pair with an off-board endpoint breaks the run without ending the
/// scan, so runs touching the edge are still found.
fn scan_axis(
    board: &Board,
    x: usize,
    y: usize,
    win_length: usize,
    (dx, dy): (isize, isize),
) -> Option<(Strike, Side)> {
    let reach = isize::try_from(win_length).ok()? - 1;
    let (cx, cy) = (isize::try_from(x).ok()?, isize::try_from(y).ok()?);
    let mut count = 1;

    for step in -reach..reach {
        let (x0, y0) = (cx + step * dx, cy + step * dy);
        let (x1, y1) = (x0 + dx, y0 + dy);

        match (board.mark_at(x0, y0), board.mark_at(x1, y1)) {
            (Some(a), Some(b)) if a == b && !a.is_empty() => {
                count += 1;
                if count == win_length {
                    let side = a.side()?;
                    let start = (
                        usize::try_from(x1 - reach * dx).ok()?,
                        usize::try_from(y1 - reach * dy).ok()?,
                    );
                    let end = (usize::try_from(x1).ok()?, usize::try_from(y1).ok()?);
                    trace!(?side, ?start, ?end, axis = ?(dx, dy), "Run completed");
                    return Some((Strike::new(start, end), side));
                }
            }
            _ => count = 1,
        }
    }

    None
}
