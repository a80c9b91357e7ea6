use crate::game_state::chess_rules::{pawn_direction, pawn_home_row};
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::legal_move_shared::OccupancyView;

/// Pawn movement for `color` standing on `from`:
/// one step forward onto an empty square, two steps from the home row when
/// both squares are empty, or one diagonal step onto an opposing piece.
/// No en passant, no promotion.
pub fn is_raw_pawn_move(view: &OccupancyView, color: Color, from: Square, to: Square) -> bool {
    let direction = pawn_direction(color);
    let (d_row, d_col) = from.delta_to(to);

    if d_col == 0 && d_row == direction {
        return !view.is_occupied(to);
    }

    if d_col == 0 && d_row == 2 * direction && from.row() == pawn_home_row(color) as usize {
        let Some(intermediate) = from.offset(direction, 0) else {
            return false;
        };
        return !view.is_occupied(to) && !view.is_occupied(intermediate);
    }

    d_col.abs() == 1 && d_row == direction && view.color_at(to) == Some(color.opposite())
}

/// Squares a pawn attacks: both forward diagonals, occupied or not.
#[inline]
pub fn pawn_attacks_square(color: Color, from: Square, target: Square) -> bool {
    let (d_row, d_col) = from.delta_to(target);
    d_row == pawn_direction(color) && d_col.abs() == 1
}
