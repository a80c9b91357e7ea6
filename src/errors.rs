//! Errors used throughout the rules engine.
//!
//! The error surface is deliberately small. Coordinates are validated once,
//! when a `Square` is built, so nothing past the API boundary can index off
//! the board. Illegal moves are not errors at all: they are ordinary state
//! transitions back to `WaitingForSelection`.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, Square};

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A coordinate outside `0..8` was supplied at the API boundary.
    ///
    /// Payload: the offending (row, col) pair as received.
    OutOfBounds { row: i64, col: i64 },

    /// Attempted to place a piece on a square that already holds one.
    SquareOccupied(Square),

    /// The board does not contain a king for the given side.
    ///
    /// This represents a corrupted position; callers should treat it as a
    /// fatal logic error rather than a game outcome.
    MissingKing(Color),

    /// The side not to move is already in check, so its king could be taken.
    OpponentInCheck(Color),

    /// The board has handed out every available piece id.
    PieceLimit,
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::OutOfBounds { row, col } => {
                write!(f, "square ({row}, {col}) is outside the 8x8 board")
            }
            ChessErrors::SquareOccupied(square) => write!(f, "square {square} is already occupied"),
            ChessErrors::MissingKing(color) => write!(f, "no {color} king on the board"),
            ChessErrors::OpponentInCheck(color) => {
                write!(f, "{color} is in check but it is not {color}'s move")
            }
            ChessErrors::PieceLimit => f.write_str("no piece ids left on this board"),
        }
    }
}

impl Error for ChessErrors {}

pub type ChessResult<T> = Result<T, ChessErrors>;
