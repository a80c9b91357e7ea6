//! Attack detection and check queries.
//!
//! A square is attacked when an opposing piece could capture on it. For the
//! sliders and the knight that is exactly their movement rule; pawns attack
//! their forward diagonals whether or not anything stands there, and kings
//! attack their eight neighbours without consulting their own safety.

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceId, PieceKind, Square};
use crate::move_generation::legal_move_shared::OccupancyView;
use crate::moves::bishop_moves::is_raw_bishop_move;
use crate::moves::king_moves::is_king_step;
use crate::moves::knight_moves::is_raw_knight_move;
use crate::moves::pawn_moves::pawn_attacks_square;
use crate::moves::queen_moves::is_raw_queen_move;
use crate::moves::rook_moves::is_raw_rook_move;

/// Whether `piece` attacks `target` on the given view of the board.
pub fn piece_attacks_square(view: &OccupancyView, piece: &Piece, target: Square) -> bool {
    let from = piece.position();
    match piece.kind() {
        PieceKind::Pawn => pawn_attacks_square(piece.color(), from, target),
        PieceKind::Knight => is_raw_knight_move(from, target),
        PieceKind::Bishop => is_raw_bishop_move(view, from, target),
        PieceKind::Rook => is_raw_rook_move(view, from, target),
        PieceKind::Queen => is_raw_queen_move(view, from, target),
        PieceKind::King => is_king_step(from, target),
    }
}

impl<'a> OccupancyView<'a> {
    /// True if any piece of `attacker_color` other than `ignoring` attacks `square`.
    pub fn is_square_attacked(
        &self,
        square: Square,
        attacker_color: Color,
        ignoring: Option<PieceId>,
    ) -> bool {
        self.pieces()
            .filter(|p| p.color() == attacker_color && Some(p.id()) != ignoring)
            .any(|p| piece_attacks_square(self, p, square))
    }
}

impl Board {
    /// True if any piece of `attacker_color` other than `ignoring` attacks `square`.
    pub fn is_square_attacked(
        &self,
        square: Square,
        attacker_color: Color,
        ignoring: Option<PieceId>,
    ) -> bool {
        OccupancyView::new(self).is_square_attacked(square, attacker_color, ignoring)
    }

    /// True if an opposing piece, other than `ignoring`, attacks the king's square.
    pub fn is_king_in_check(&self, king: &Piece, ignoring: Option<PieceId>) -> bool {
        self.is_square_attacked(king.position(), king.color().opposite(), ignoring)
    }

    /// Check query by color. Fails only when that side has no king.
    pub fn is_in_check(&self, color: Color) -> ChessResult<bool> {
        let king = self.find_king(color).ok_or(ChessErrors::MissingKing(color))?;
        Ok(self.is_king_in_check(king, None))
    }

    /// Every piece of `attacker_color` that attacks `square`.
    pub fn attackers_to_square(&self, square: Square, attacker_color: Color) -> Vec<&Piece> {
        let view = OccupancyView::new(self);
        self.pieces_of(attacker_color)
            .filter(|p| piece_attacks_square(&view, p, square))
            .collect()
    }
}
