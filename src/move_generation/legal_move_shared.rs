use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, Square};

/// Read-only window onto a board, optionally treating one square as vacant.
///
/// King legality asks whether its destination would be attacked once the
/// king has left its current square. Rather than mutating the board, the
/// walk functions read occupancy through this view with the king's square
/// blanked out.
#[derive(Clone, Copy)]
pub struct OccupancyView<'a> {
    board: &'a Board,
    vacated: Option<Square>,
}

impl<'a> OccupancyView<'a> {
    #[inline]
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            vacated: None,
        }
    }

    #[inline]
    pub fn with_vacated(board: &'a Board, square: Square) -> Self {
        Self {
            board,
            vacated: Some(square),
        }
    }

    #[inline]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    #[inline]
    pub fn occupant_at(&self, square: Square) -> Option<&'a Piece> {
        if self.vacated == Some(square) {
            None
        } else {
            self.board.occupant_at(square)
        }
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.occupant_at(square).is_some()
    }

    #[inline]
    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.occupant_at(square).map(|p| p.color())
    }

    /// Pieces visible through the view.
    pub fn pieces(&self) -> impl Iterator<Item = &'a Piece> + 'a {
        let vacated = self.vacated;
        self.board
            .pieces()
            .filter(move |p| Some(p.position()) != vacated)
    }
}
