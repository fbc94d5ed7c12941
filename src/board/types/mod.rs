//! Core chess types.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `Piece`, `Color` and `Occupant` - piece kinds, colors and placed pieces
//! - `Square` - (rank, file) board coordinate
//! - `Bitboard` - 64-bit square set used for reach and attack masks
//! - `Move` and `MoveKind` - classified moves
//! - `CastleSide` - castling geometry

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::CastleSide;
pub use moves::{Move, MoveKind};
pub use piece::{Color, Occupant, Piece};
pub use square::Square;

pub(crate) use castling::KING_HOME_FILE;
pub(crate) use piece::PROMOTION_PIECES;
