//! Chess board representation and per-piece rules.
//!
//! The board is an 8x8 grid of optional [`Occupant`]s indexed by
//! `Square(rank, file)`, rank 0 being White's back rank. Move generation
//! returns [`Bitboard`] reach masks; nothing transient is ever stored on the
//! board itself.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Square};
//!
//! let board = Board::new();
//! let knight: Square = "g1".parse().unwrap();
//! let targets = board.pseudo_legal_targets(knight);
//! assert_eq!(targets.popcount(), 2);
//! ```

mod attack_tables;
mod builder;
mod check;
mod display;
mod error;
mod make_unmake;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{PositionError, SquareError};
pub use make_unmake::UnmakeInfo;
pub use state::Board;
pub use types::{Bitboard, BitboardIter, CastleSide, Color, Move, MoveKind, Occupant, Piece, Square};

pub(crate) use types::{KING_HOME_FILE, PROMOTION_PIECES};
