use crate::game_state::chess_types::Square;

/// Knight movement: an L of (2, 1) or (1, 2). Knights jump, so nothing on
/// the board is consulted.
#[inline]
pub fn is_raw_knight_move(from: Square, to: Square) -> bool {
    let (d_row, d_col) = from.delta_to(to);
    matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2))
}
