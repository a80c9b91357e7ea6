//! Legality gate: raw movement rules composed with check avoidance.
//!
//! A move is legal when the destination is not friendly-occupied, the piece's
//! movement rule allows it, and playing it does not leave the mover's own
//! king attacked. The last test plays the move on the board through
//! `SimulatedMove` and undoes it before returning.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::undo_state::SimulatedMove;
use crate::move_generation::legal_move_shared::OccupancyView;
use crate::moves::bishop_moves::is_raw_bishop_move;
use crate::moves::king_moves::is_raw_king_move;
use crate::moves::knight_moves::is_raw_knight_move;
use crate::moves::pawn_moves::is_raw_pawn_move;
use crate::moves::queen_moves::is_raw_queen_move;
use crate::moves::rook_moves::is_raw_rook_move;

/// How a destination would be reached, for highlight styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationKind {
    Quiet,
    Capture,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    pub square: Square,
    pub kind: DestinationKind,
}

/// Movement rule of `piece` toward `to`, ignoring check safety.
pub fn is_raw_legal_move(view: &OccupancyView, piece: &Piece, to: Square) -> bool {
    let from = piece.position();
    match piece.kind() {
        PieceKind::Pawn => is_raw_pawn_move(view, piece.color(), from, to),
        PieceKind::Knight => is_raw_knight_move(from, to),
        PieceKind::Bishop => is_raw_bishop_move(view, from, to),
        PieceKind::Rook => is_raw_rook_move(view, from, to),
        PieceKind::Queen => is_raw_queen_move(view, from, to),
        PieceKind::King => is_raw_king_move(view, piece, to),
    }
}

impl Board {
    #[inline]
    pub fn is_raw_legal_move(&self, piece: &Piece, to: Square) -> bool {
        is_raw_legal_move(&OccupancyView::new(self), piece, to)
    }

    /// Plays `piece -> to`, checks whether the mover's king is attacked, and
    /// restores the board. A move that cannot be played at all (empty source,
    /// friendly destination) or a side without a king is never safe.
    pub fn is_move_safe(&mut self, piece: Piece, to: Square) -> bool {
        let Some(probe) = SimulatedMove::apply(self, piece.position(), to) else {
            return false;
        };
        let board = probe.board();
        match board.find_king(piece.color()) {
            Some(king) => !board.is_king_in_check(king, None),
            None => false,
        }
    }

    /// Full legality: not onto a friendly piece, raw-legal, and move-safe.
    pub fn is_legal_move(&mut self, piece: Piece, to: Square) -> bool {
        if self
            .occupant_at(to)
            .is_some_and(|p| p.color() == piece.color())
        {
            return false;
        }
        self.is_raw_legal_move(&piece, to) && self.is_move_safe(piece, to)
    }

    /// Legal destinations of the piece on `from`, in row-major order. Empty
    /// when the square is empty.
    pub fn legal_destinations(&mut self, from: Square) -> Vec<Destination> {
        let Some(piece) = self.occupant_at(from).copied() else {
            return Vec::new();
        };
        let mut out = Vec::new();
        for to in Square::all() {
            if self.is_legal_move(piece, to) {
                let kind = if self.is_occupied(to) {
                    DestinationKind::Capture
                } else {
                    DestinationKind::Quiet
                };
                out.push(Destination { square: to, kind });
            }
        }
        out
    }

    /// Whether `color` has at least one legal move. Stops at the first one found.
    pub fn has_any_legal_move(&mut self, color: Color) -> bool {
        let movers: Vec<Piece> = self.pieces_of(color).copied().collect();
        movers
            .into_iter()
            .any(|piece| Square::all().any(|to| self.is_legal_move(piece, to)))
    }

    /// True when the side of `king` has no legal move at all.
    ///
    /// This does not look at whether the king is currently attacked; the game
    /// only asks after it has seen the king in check.
    pub fn is_checkmate(&mut self, king: &Piece) -> bool {
        !self.has_any_legal_move(king.color())
    }
}
