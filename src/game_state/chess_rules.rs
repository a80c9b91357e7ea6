//! Canonical chess-rule constants.
//!
//! Board dimensions, the standard back-rank order and the per-color pawn
//! geometry used by setup and by the pawn movement rule.

use crate::game_state::chess_types::{Color, PieceKind};

/// Squares per side.
pub const BOARD_SIZE: usize = 8;

/// Back-rank order from column 0 to column 7, identical for both colors.
pub const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[inline]
pub const fn back_rank_row(color: Color) -> u8 {
    match color {
        Color::White => BOARD_SIZE as u8 - 1,
        Color::Black => 0,
    }
}

/// Row the pawns start on; a pawn standing here may advance two squares.
#[inline]
pub const fn pawn_home_row(color: Color) -> u8 {
    match color {
        Color::White => BOARD_SIZE as u8 - 2,
        Color::Black => 1,
    }
}

/// Row delta of a pawn advance. White moves toward row 0.
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}
