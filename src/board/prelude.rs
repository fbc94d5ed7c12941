//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used board and game types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let game = Game::new();
//! assert_eq!(game.active_color(), Color::White);
//! ```

pub use super::{
    Bitboard, Board, BoardBuilder, CastleSide, Color, Move, MoveKind, Occupant, Piece,
    PositionError, Square, SquareError,
};
pub use crate::game::{Command, Game, GameResult, MoveError, PromotionChooser, RuleParams};
