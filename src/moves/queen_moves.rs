use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::OccupancyView;
use crate::moves::bishop_moves::is_raw_bishop_move;
use crate::moves::rook_moves::is_raw_rook_move;

/// Queen movement: rook lines or bishop diagonals with the matching walk.
#[inline]
pub fn is_raw_queen_move(view: &OccupancyView, from: Square, to: Square) -> bool {
    is_raw_rook_move(view, from, to) || is_raw_bishop_move(view, from, to)
}

#[cfg(test)]
mod tests {
    use super::is_raw_queen_move;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind, Square};
    use crate::move_generation::legal_move_shared::OccupancyView;

    #[test]
    fn queen_from_d4_on_empty_board_has_twenty_seven_targets() {
        let board = Board::empty();
        let view = OccupancyView::new(&board);
        let d4 = Square::at(4, 3);
        let targets = Square::all()
            .filter(|to| is_raw_queen_move(&view, d4, *to))
            .count();
        assert_eq!(targets, 27);
    }

    #[test]
    fn queen_rejects_knight_shapes_and_blocked_lines() {
        let mut board = Board::empty();
        board.place(PieceKind::Pawn, Color::White, Square::at(3, 3)).unwrap();
        let view = OccupancyView::new(&board);
        let d4 = Square::at(4, 3);

        assert!(!is_raw_queen_move(&view, d4, Square::at(2, 4)));
        assert!(is_raw_queen_move(&view, d4, Square::at(3, 3)));
        assert!(!is_raw_queen_move(&view, d4, Square::at(1, 3)));
        assert!(is_raw_queen_move(&view, d4, Square::at(1, 0)));
    }
}
