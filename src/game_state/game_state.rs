//! Selection-driven game state machine.
//!
//! `Game` owns the board and the side to move, and advances through
//! `GameState` one board tap at a time. It is the whole surface a front end
//! needs: feed it coordinates through `select_or_move_at`, draw what the
//! returned `GameSnapshot` describes, and call `restart` after a checkmate.

use std::fmt;

use log::{debug, error, info, warn};

use crate::errors::{ChessErrors, ChessResult};
use crate::game_state::board::{Board, MoveOutcome};
use crate::game_state::chess_types::{Color, Piece, PieceId, PieceKind, Square};
use crate::move_generation::legal_move_generator::Destination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    WaitingForSelection,
    /// A piece of the side to move is selected. The handle is resolved
    /// against the board before every use.
    PieceSelected(PieceId),
    /// Terminal until `restart`.
    Checkmate(Color),
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::WaitingForSelection => f.write_str("waiting for selection"),
            GameState::PieceSelected(_) => f.write_str("piece selected"),
            GameState::Checkmate(winner) => write!(f, "{winner} wins by checkmate"),
        }
    }
}

/// Something that happened during one `select_or_move` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Moved {
        from: Square,
        to: Square,
        captured: Option<Piece>,
    },
    /// The side to move is in check; `checkers` are the attacking squares.
    Check { color: Color, checkers: Vec<Square> },
    Checkmate { winner: Color },
    /// The side to move is not in check but has no legal move.
    NoLegalMoves { color: Color },
    /// A move was attempted onto a square the selected piece cannot reach.
    Rejected { target: Square },
}

/// Everything a front end needs to redraw after an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub state: GameState,
    pub current_player: Color,
    /// Legal destinations of the selected piece; empty unless a piece is selected.
    pub highlights: Vec<Destination>,
    pub events: Vec<GameEvent>,
}

impl GameSnapshot {
    pub fn captured(&self) -> Option<&Piece> {
        self.events.iter().find_map(|e| match e {
            GameEvent::Moved { captured, .. } => captured.as_ref(),
            _ => None,
        })
    }

    pub fn is_checkmate(&self) -> bool {
        matches!(self.state, GameState::Checkmate(_))
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_player: Color,
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A fresh game: standard setup, White to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Color::White,
            state: GameState::WaitingForSelection,
        }
    }

    /// Starts from an arbitrary position. Both kings must be present and the
    /// side not to move must not be in check.
    pub fn from_position(board: Board, current_player: Color) -> ChessResult<Self> {
        for color in [Color::White, Color::Black] {
            if board.find_king(color).is_none() {
                return Err(ChessErrors::MissingKing(color));
            }
        }
        let waiting = current_player.opposite();
        if board.is_in_check(waiting)? {
            return Err(ChessErrors::OpponentInCheck(waiting));
        }
        Ok(Self {
            board,
            current_player,
            state: GameState::WaitingForSelection,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Destroys all pieces, sets the board up again and hands the move to White.
    pub fn restart(&mut self) {
        self.board.setup_initial_position();
        self.current_player = Color::White;
        self.state = GameState::WaitingForSelection;
        info!("game restarted");
    }

    /// Rendering query: what stands on (row, col).
    pub fn occupant_at(&self, row: i64, col: i64) -> ChessResult<Option<(PieceKind, Color)>> {
        let square = Square::new(row, col)?;
        Ok(self
            .board
            .occupant_at(square)
            .map(|p| (p.kind(), p.color())))
    }

    /// Legal destinations of whatever stands on (row, col).
    pub fn legal_destinations(&mut self, row: i64, col: i64) -> ChessResult<Vec<Destination>> {
        let square = Square::new(row, col)?;
        Ok(self.board.legal_destinations(square))
    }

    /// Entry point for a tap at raw coordinates.
    pub fn select_or_move_at(&mut self, row: i64, col: i64) -> ChessResult<GameSnapshot> {
        let square = Square::new(row, col)?;
        self.select_or_move(square)
    }

    /// Advances the state machine by one selection at `square`.
    pub fn select_or_move(&mut self, square: Square) -> ChessResult<GameSnapshot> {
        let mut events = Vec::new();
        let own_piece = self
            .board
            .occupant_at(square)
            .filter(|p| p.color() == self.current_player)
            .map(|p| p.id());

        match self.state {
            GameState::Checkmate(_) => {}
            GameState::WaitingForSelection => {
                if let Some(id) = own_piece {
                    debug!("{} selects {square}", self.current_player);
                    self.state = GameState::PieceSelected(id);
                }
            }
            GameState::PieceSelected(selected) => {
                if let Some(id) = own_piece {
                    debug!("{} re-selects {square}", self.current_player);
                    self.state = GameState::PieceSelected(id);
                } else {
                    self.state = GameState::WaitingForSelection;
                    match self.board.find_piece(selected).copied() {
                        Some(piece) => {
                            if piece.color() == self.current_player
                                && self.board.is_legal_move(piece, square)
                            {
                                self.execute_move(piece, square, &mut events)?;
                            } else {
                                warn!("rejected {} {} -> {square}", piece.color(), piece.position());
                                events.push(GameEvent::Rejected { target: square });
                            }
                        }
                        None => warn!("selected piece {selected:?} is no longer on the board"),
                    }
                }
            }
        }

        Ok(self.snapshot_with(events))
    }

    fn execute_move(
        &mut self,
        piece: Piece,
        to: Square,
        events: &mut Vec<GameEvent>,
    ) -> ChessResult<()> {
        let from = piece.position();
        let opponent = piece.color().opposite();
        if self.board.find_king(opponent).is_none() {
            error!("board has no {opponent} king:\n{}", self.board);
            return Err(ChessErrors::MissingKing(opponent));
        }
        if self
            .board
            .occupant_at(to)
            .is_some_and(|p| p.kind() == PieceKind::King)
        {
            warn!("refusing to capture the {opponent} king on {to}");
            events.push(GameEvent::Rejected { target: to });
            return Ok(());
        }

        let MoveOutcome::Moved { captured } = self.board.move_piece(from, to) else {
            warn!("move {from} -> {to} could not be played");
            events.push(GameEvent::Rejected { target: to });
            return Ok(());
        };
        debug!("{} plays {from} -> {to}", piece.color());
        if let Some(victim) = &captured {
            debug!("{} captures {:?} on {to}", piece.color(), victim.kind());
        }
        events.push(GameEvent::Moved { from, to, captured });

        let mover = self.current_player;
        self.current_player = mover.opposite();

        let Some(king) = self.board.find_king(self.current_player).copied() else {
            error!("board has no {} king:\n{}", self.current_player, self.board);
            return Err(ChessErrors::MissingKing(self.current_player));
        };
        if self.board.is_king_in_check(&king, None) {
            if self.board.is_checkmate(&king) {
                info!("{mover} wins by checkmate");
                self.state = GameState::Checkmate(mover);
                events.push(GameEvent::Checkmate { winner: mover });
            } else {
                info!("{} is in check", self.current_player);
                let checkers = self
                    .board
                    .attackers_to_square(king.position(), mover)
                    .into_iter()
                    .map(|p| p.position())
                    .collect();
                events.push(GameEvent::Check {
                    color: self.current_player,
                    checkers,
                });
            }
        } else if !self.board.has_any_legal_move(self.current_player) {
            info!("{} has no legal move", self.current_player);
            events.push(GameEvent::NoLegalMoves {
                color: self.current_player,
            });
        }
        Ok(())
    }

    /// Current state with highlights for the selected piece, if any.
    pub fn snapshot(&mut self) -> GameSnapshot {
        self.snapshot_with(Vec::new())
    }

    fn snapshot_with(&mut self, events: Vec<GameEvent>) -> GameSnapshot {
        let highlights = match self.state {
            GameState::PieceSelected(id) => match self.board.find_piece(id).copied() {
                Some(piece) => self.board.legal_destinations(piece.position()),
                None => Vec::new(),
            },
            _ => Vec::new(),
        };
        GameSnapshot {
            state: self.state,
            current_player: self.current_player,
            highlights,
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::prelude::IndexedRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{Game, GameEvent, GameSnapshot, GameState};
    use crate::errors::ChessErrors;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind, Square};

    fn tap(game: &mut Game, row: i64, col: i64) -> GameSnapshot {
        game.select_or_move_at(row, col).expect("tap should be on the board")
    }

    #[test]
    fn new_game_waits_for_white() {
        let mut game = Game::new();
        assert_eq!(game.state(), GameState::WaitingForSelection);
        assert_eq!(game.current_player(), Color::White);
        assert_eq!(game.occupant_at(7, 4), Ok(Some((PieceKind::King, Color::White))));
        assert_eq!(game.occupant_at(3, 3), Ok(None));
        assert!(game.snapshot().highlights.is_empty());
    }

    #[test]
    fn out_of_bounds_taps_are_rejected_before_touching_state() {
        let mut game = Game::new();
        assert_eq!(
            game.select_or_move_at(8, 2),
            Err(ChessErrors::OutOfBounds { row: 8, col: 2 })
        );
        assert_eq!(
            game.occupant_at(-1, 0),
            Err(ChessErrors::OutOfBounds { row: -1, col: 0 })
        );
        assert_eq!(game.state(), GameState::WaitingForSelection);
    }

    #[test]
    fn tapping_empty_or_opposing_square_keeps_waiting() {
        let mut game = Game::new();
        assert_eq!(tap(&mut game, 4, 4).state, GameState::WaitingForSelection);
        assert_eq!(tap(&mut game, 1, 4).state, GameState::WaitingForSelection);
    }

    #[test]
    fn selecting_own_piece_highlights_its_moves() {
        let mut game = Game::new();
        let snapshot = tap(&mut game, 7, 1);
        let knight = game.board().occupant_at(Square::at(7, 1)).unwrap().id();
        assert_eq!(snapshot.state, GameState::PieceSelected(knight));
        let targets: Vec<Square> = snapshot.highlights.iter().map(|d| d.square).collect();
        assert_eq!(targets, vec![Square::at(5, 0), Square::at(5, 2)]);
    }

    #[test]
    fn tapping_another_own_piece_reselects() {
        let mut game = Game::new();
        tap(&mut game, 6, 0);
        let snapshot = tap(&mut game, 6, 7);
        let pawn = game.board().occupant_at(Square::at(6, 7)).unwrap().id();
        assert_eq!(snapshot.state, GameState::PieceSelected(pawn));
        assert_eq!(snapshot.highlights.len(), 2);
    }

    #[test]
    fn legal_move_flips_the_turn() {
        let mut game = Game::new();
        tap(&mut game, 6, 4);
        let snapshot = tap(&mut game, 4, 4);

        assert_eq!(snapshot.state, GameState::WaitingForSelection);
        assert_eq!(snapshot.current_player, Color::Black);
        assert!(snapshot.highlights.is_empty());
        assert_eq!(
            snapshot.events,
            vec![GameEvent::Moved {
                from: Square::at(6, 4),
                to: Square::at(4, 4),
                captured: None,
            }]
        );
        assert_eq!(game.occupant_at(4, 4), Ok(Some((PieceKind::Pawn, Color::White))));
        assert_eq!(game.occupant_at(6, 4), Ok(None));
    }

    #[test]
    fn illegal_target_drops_selection_without_moving() {
        let mut game = Game::new();
        let before = game.board().clone();
        tap(&mut game, 6, 4);
        let snapshot = tap(&mut game, 3, 4);

        assert_eq!(snapshot.state, GameState::WaitingForSelection);
        assert_eq!(snapshot.current_player, Color::White);
        assert_eq!(
            snapshot.events,
            vec![GameEvent::Rejected {
                target: Square::at(3, 4)
            }]
        );
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn capture_is_reported() {
        let mut game = Game::new();
        for (row, col) in [(6, 4), (4, 4), (1, 3), (3, 3)] {
            tap(&mut game, row, col);
        }
        tap(&mut game, 4, 4);
        let snapshot = tap(&mut game, 3, 3);
        let captured = snapshot.captured().expect("pawn takes pawn");
        assert_eq!((captured.kind(), captured.color()), (PieceKind::Pawn, Color::Black));
        assert_eq!(game.board().pieces().count(), 31);
    }

    #[test]
    fn check_is_announced() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::White, Square::at(7, 4)).unwrap();
        board.place(PieceKind::Rook, Color::White, Square::at(7, 0)).unwrap();
        board.place(PieceKind::King, Color::Black, Square::at(0, 4)).unwrap();
        let mut game = Game::from_position(board, Color::White).unwrap();

        tap(&mut game, 7, 0);
        let snapshot = tap(&mut game, 0, 0);
        assert_eq!(snapshot.state, GameState::WaitingForSelection);
        assert!(snapshot.events.contains(&GameEvent::Check {
            color: Color::Black,
            checkers: vec![Square::at(0, 0)],
        }));
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let mut game = Game::new();
        let plies = [
            ((6, 5), (5, 5)),
            ((1, 4), (3, 4)),
            ((6, 6), (4, 6)),
            ((0, 3), (4, 7)),
        ];
        let mut last = None;
        for ((fr, fc), (tr, tc)) in plies {
            tap(&mut game, fr, fc);
            last = Some(tap(&mut game, tr, tc));
        }
        let last = last.unwrap();
        assert_eq!(last.state, GameState::Checkmate(Color::Black));
        assert!(last.is_checkmate());
        assert!(last.events.contains(&GameEvent::Checkmate {
            winner: Color::Black
        }));
        assert_eq!(last.state.to_string(), "Black wins by checkmate");

        // Terminal: further taps change nothing.
        let board = game.board().clone();
        let after = tap(&mut game, 6, 0);
        assert_eq!(after.state, GameState::Checkmate(Color::Black));
        assert!(after.events.is_empty());
        assert_eq!(game.board(), &board);

        game.restart();
        assert_eq!(game.state(), GameState::WaitingForSelection);
        assert_eq!(game.current_player(), Color::White);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn queen_mate_through_the_state_machine() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::Black, Square::at(0, 0)).unwrap();
        board.place(PieceKind::Queen, Color::White, Square::at(1, 5)).unwrap();
        board.place(PieceKind::King, Color::White, Square::at(2, 2)).unwrap();
        let mut game = Game::from_position(board, Color::White).unwrap();

        tap(&mut game, 1, 5);
        let snapshot = tap(&mut game, 1, 1);
        assert_eq!(snapshot.state, GameState::Checkmate(Color::White));
    }

    #[test]
    fn from_position_requires_both_kings() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::White, Square::at(7, 4)).unwrap();
        assert_eq!(
            Game::from_position(board, Color::White).err(),
            Some(ChessErrors::MissingKing(Color::Black))
        );
    }

    #[test]
    fn from_position_rejects_waiting_side_in_check() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::White, Square::at(7, 4)).unwrap();
        board.place(PieceKind::Rook, Color::White, Square::at(0, 0)).unwrap();
        board.place(PieceKind::King, Color::Black, Square::at(0, 4)).unwrap();

        assert_eq!(
            Game::from_position(board.clone(), Color::White).err(),
            Some(ChessErrors::OpponentInCheck(Color::Black))
        );
        assert!(Game::from_position(board, Color::Black).is_ok());
    }

    #[test]
    fn king_capture_is_refused_without_changing_the_game() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::White, Square::at(7, 4)).unwrap();
        board.place(PieceKind::Rook, Color::White, Square::at(0, 0)).unwrap();
        board.place(PieceKind::King, Color::Black, Square::at(0, 4)).unwrap();
        let before = board.clone();
        let mut game = Game {
            board,
            current_player: Color::White,
            state: GameState::WaitingForSelection,
        };

        tap(&mut game, 0, 0);
        let snapshot = tap(&mut game, 0, 4);
        assert_eq!(
            snapshot.events,
            vec![GameEvent::Rejected {
                target: Square::at(0, 4)
            }]
        );
        assert_eq!(snapshot.current_player, Color::White);
        assert_eq!(game.board(), &before);
        assert!(game.board().find_king(Color::Black).is_some());
    }

    #[test]
    fn side_without_moves_is_announced() {
        let mut board = Board::empty();
        board.place(PieceKind::King, Color::Black, Square::at(0, 0)).unwrap();
        board.place(PieceKind::Queen, Color::White, Square::at(3, 1)).unwrap();
        board.place(PieceKind::King, Color::White, Square::at(7, 7)).unwrap();
        let mut game = Game::from_position(board, Color::White).unwrap();

        tap(&mut game, 3, 1);
        let snapshot = tap(&mut game, 2, 1);
        assert_eq!(snapshot.state, GameState::WaitingForSelection);
        assert_eq!(snapshot.current_player, Color::Black);
        assert!(snapshot.events.contains(&GameEvent::NoLegalMoves {
            color: Color::Black
        }));
        assert!(!snapshot
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::Check { .. } | GameEvent::Checkmate { .. })));
    }

    #[test]
    fn random_playouts_alternate_and_never_self_check() {
        for seed in 0..8u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = Game::new();

            for _ in 0..120 {
                let mover = game.current_player();
                let starts: Vec<Square> = game.board().pieces_of(mover).map(|p| p.position()).collect();
                let mut moves = Vec::new();
                for from in starts {
                    let targets = game
                        .legal_destinations(from.row() as i64, from.col() as i64)
                        .unwrap();
                    moves.extend(targets.into_iter().map(|d| (from, d.square)));
                }
                let Some(&(from, to)) = moves.choose(&mut rng) else {
                    break;
                };

                game.select_or_move(from).unwrap();
                let snapshot = game.select_or_move(to).unwrap();

                assert_eq!(snapshot.current_player, mover.opposite());
                let king = game.board().find_king(mover).expect("mover keeps its king");
                assert!(!game.board().is_king_in_check(king, None));
                assert!(game.board().find_king(mover.opposite()).is_some());

                if snapshot.is_checkmate() {
                    assert_eq!(snapshot.state, GameState::Checkmate(mover));
                    break;
                }
            }
        }
    }
}
