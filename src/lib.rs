//! Rules enforcement for standard chess.
//!
//! The [`board`] module holds the position model, per-piece move generation,
//! attack/check evaluation and the move executor. The [`game`] module drives a
//! game: it validates and classifies move requests, commits them, and detects
//! checkmate, stalemate and every draw condition.
//!
//! # Example
//! ```
//! use chess_rules::{Color, Game, GameResult, Piece, Square};
//!
//! let mut game = Game::new();
//! let mut promote = |_: Color, _: Square| Piece::Queen;
//! game.play_move("e2".parse().unwrap(), "e4".parse().unwrap(), &mut promote).unwrap();
//! assert_eq!(game.active_color(), Color::Black);
//! assert_eq!(game.result(), GameResult::InProgress);
//! ```

pub mod board;
pub mod game;

pub use board::{Bitboard, Board, BoardBuilder, CastleSide, Color, Move, MoveKind, Occupant, Piece, Square};
pub use game::{Command, Game, GameResult, MoveError, MoveReport, PromotionChooser, RuleParams};
