use crate::game_state::chess_types::{Piece, Square};
use crate::move_generation::legal_move_shared::OccupancyView;

/// One square in any direction.
#[inline]
pub fn is_king_step(from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    d_row.abs() <= 1 && d_col.abs() <= 1 && (d_row, d_col) != (0, 0)
}

/// King movement: a single step onto a square that is not friendly-occupied
/// and not attacked by the other side once the king has left `from`.
///
/// This is the only movement rule that consults attack analysis, which is why
/// attack reach for kings (`is_king_step`) never calls back into it.
pub fn is_raw_king_move(view: &OccupancyView, king: &Piece, to: Square) -> bool {
    if !is_king_step(king.position(), to) {
        return false;
    }
    if view.color_at(to) == Some(king.color()) {
        return false;
    }
    let vacated = OccupancyView::with_vacated(view.board(), king.position());
    !vacated.is_square_attacked(to, king.color().opposite(), None)
}
