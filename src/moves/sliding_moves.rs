//! Step-and-check walks shared by the sliding pieces.
//!
//! Both walks look only at the squares strictly between the endpoints. What
//! stands on the destination is decided elsewhere: captures at board level,
//! attack reach in `legal_move_checks`.

use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::OccupancyView;

/// Same row or same column, but not the same square.
#[inline]
pub fn is_straight_line(from: Square, to: Square) -> bool {
    (from.row() == to.row()) != (from.col() == to.col())
}

/// Equal non-zero row and column distance.
#[inline]
pub fn is_diagonal_line(from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    d_row != 0 && d_row.abs() == d_col.abs()
}

/// Walks a rank or file from `from` toward `to`; true when nothing stands
/// in between.
pub fn straight_path_clear(view: &OccupancyView, from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    let (step_row, step_col) = (d_row.signum(), d_col.signum());

    let mut current = from.offset(step_row, step_col);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if view.is_occupied(square) {
            return false;
        }
        current = square.offset(step_row, step_col);
    }
    true
}

/// Walks a diagonal from `from` toward `to`. Stepping stops as soon as either
/// coordinate reaches the target or the walk leaves the board.
pub fn diagonal_path_clear(view: &OccupancyView, from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    let (step_row, step_col) = (d_row.signum(), d_col.signum());

    let mut current = from.offset(step_row, step_col);
    while let Some(square) = current {
        if square.row() == to.row() || square.col() == to.col() {
            break;
        }
        if view.is_occupied(square) {
            return false;
        }
        current = square.offset(step_row, step_col);
    }
    true
}
