use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::OccupancyView;
use crate::moves::sliding_moves::{diagonal_path_clear, is_diagonal_line};

/// Bishop movement: along a diagonal with nothing in between.
#[inline]
pub fn is_raw_bishop_move(view: &OccupancyView, from: Square, to: Square) -> bool {
    is_diagonal_line(from, to) && diagonal_path_clear(view, from, to)
}
