//! Scoped simulate-and-undo for move-safety probes.
//!
//! Asking "would this move leave my king attacked" is answered by playing the
//! move on the real board and looking. `SimulatedMove` owns the mutable borrow
//! for the duration of the probe and puts everything back in `Drop`, so the
//! board is restored on every exit path, early returns and unwinding included.

use crate::game_state::board::{Board, MoveOutcome};
use crate::game_state::chess_types::{Piece, Square};

/// A move played on the board that is undone when this value is dropped.
pub struct SimulatedMove<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    captured: Option<Piece>,
}

impl<'a> SimulatedMove<'a> {
    /// Plays `from -> to` through `Board::move_piece`. Returns `None` (and
    /// leaves the board untouched) when the move could not be made at all.
    pub fn apply(board: &'a mut Board, from: Square, to: Square) -> Option<Self> {
        match board.move_piece(from, to) {
            MoveOutcome::Moved { captured } => Some(Self {
                board,
                from,
                to,
                captured,
            }),
            MoveOutcome::EmptySource | MoveOutcome::FriendlyOccupied => None,
        }
    }

    /// The board as it stands with the move applied.
    #[inline]
    pub fn board(&self) -> &Board {
        self.board
    }

    #[inline]
    pub fn captured(&self) -> Option<&Piece> {
        self.captured.as_ref()
    }
}

impl Drop for SimulatedMove<'_> {
    fn drop(&mut self) {
        if let Some(mut piece) = self.board.take(self.to) {
            piece.set_position(self.from);
            self.board.put(piece);
        }
        if let Some(captured) = self.captured.take() {
            self.board.put(captured);
        }
    }
}
