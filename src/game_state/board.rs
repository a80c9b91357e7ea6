//! Board occupancy model.
//!
//! `Board` is the single owner of every piece in play: an 8x8 grid of
//! optional occupants. A captured piece is dropped from the grid and is gone.
//! Movement rules, attack queries and the legality gate live in
//! `move_generation` as further `impl Board` blocks; this module covers
//! setup, reads and the one raw mutation, `move_piece`.

use std::fmt;

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{back_rank_row, pawn_home_row, BACK_RANK, BOARD_SIZE};
use crate::game_state::chess_types::{Color, Piece, PieceId, PieceKind, Square};

/// Result of a raw `move_piece` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Source square was empty; nothing happened.
    EmptySource,
    /// Destination holds a piece of the mover's color; nothing happened.
    FriendlyOccupied,
    /// The piece moved. `captured` is the opposing piece removed from the
    /// destination, if there was one.
    Moved { captured: Option<Piece> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    next_id: u16,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Board in the standard starting position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_initial_position();
        board
    }

    /// Board with no pieces, for building custom positions.
    pub fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
            next_id: 0,
        }
    }

    /// Destroys every piece and lays out the standard back ranks and pawn ranks.
    pub fn setup_initial_position(&mut self) {
        self.clear();
        for color in [Color::Black, Color::White] {
            let back = back_rank_row(color);
            let pawns = pawn_home_row(color);
            for (col, kind) in BACK_RANK.iter().enumerate() {
                self.insert_fresh(*kind, color, Square::at(back, col as u8));
                self.insert_fresh(PieceKind::Pawn, color, Square::at(pawns, col as u8));
            }
        }
    }

    /// Removes (and drops) every piece. Piece ids restart from zero.
    pub fn clear(&mut self) {
        self.squares = [[None; BOARD_SIZE]; BOARD_SIZE];
        self.next_id = 0;
    }

    /// Adds a new piece on an empty square.
    pub fn place(&mut self, kind: PieceKind, color: Color, square: Square) -> ChessResult<PieceId> {
        if self.occupant_at(square).is_some() {
            return Err(ChessErrors::SquareOccupied(square));
        }
        let next = self.next_id.checked_add(1).ok_or(ChessErrors::PieceLimit)?;
        let id = PieceId(self.next_id);
        self.next_id = next;
        self.squares[square.row()][square.col()] = Some(Piece::new(id, kind, color, square));
        Ok(id)
    }

    // Only called right after `clear`, so the 32 starting ids always fit.
    fn insert_fresh(&mut self, kind: PieceKind, color: Color, square: Square) {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.squares[square.row()][square.col()] = Some(Piece::new(id, kind, color, square));
    }

    #[inline]
    pub fn occupant_at(&self, square: Square) -> Option<&Piece> {
        self.squares[square.row()][square.col()].as_ref()
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.occupant_at(square).is_some()
    }

    /// Every piece on the board in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.squares.iter().flatten().flatten()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |p| p.color() == color)
    }

    /// Resolves a piece handle against the current contents of the board.
    pub fn find_piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces().find(|p| p.id() == id)
    }

    /// The king of `color`. `None` only on a corrupted board.
    pub fn find_king(&self, color: Color) -> Option<&Piece> {
        self.pieces()
            .find(|p| p.kind() == PieceKind::King && p.color() == color)
    }

    /// Relocates the piece on `from` to `to`, destroying an opposing occupant.
    ///
    /// Performs no legality checks; callers gate through `is_legal_move`.
    pub fn move_piece(&mut self, from: Square, to: Square) -> MoveOutcome {
        let Some(mover) = self.occupant_at(from).copied() else {
            return MoveOutcome::EmptySource;
        };
        if let Some(target) = self.occupant_at(to) {
            if target.color() == mover.color() {
                return MoveOutcome::FriendlyOccupied;
            }
        }

        let captured = self.take(to);
        self.take(from);
        let mut moved = mover;
        moved.set_position(to);
        self.put(moved);
        MoveOutcome::Moved { captured }
    }

    #[inline]
    pub(crate) fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row()][square.col()].take()
    }

    /// Writes a piece back onto the square its position names.
    #[inline]
    pub(crate) fn put(&mut self, piece: Piece) {
        let square = piece.position();
        self.squares[square.row()][square.col()] = Some(piece);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.squares {
            let line: String = row
                .iter()
                .map(|sq| match sq {
                    Some(p) => p.kind().symbol(p.color()),
                    None => '.',
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
