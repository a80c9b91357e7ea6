//! Crate root module declarations for the tap_chess rules engine.
//!
//! The engine keeps board state, enforces per-piece movement, detects check
//! and checkmate, and alternates turns. Rendering and input mapping belong to
//! the caller: `game_state::game_state::Game` takes board coordinates and
//! hands back snapshots to draw.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
}
