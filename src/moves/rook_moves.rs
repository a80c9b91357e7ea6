use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::OccupancyView;
use crate::moves::sliding_moves::{is_straight_line, straight_path_clear};

/// Rook movement: along a rank or file with nothing in between.
#[inline]
pub fn is_raw_rook_move(view: &OccupancyView, from: Square, to: Square) -> bool {
    is_straight_line(from, to) && straight_path_clear(view, from, to)
}
