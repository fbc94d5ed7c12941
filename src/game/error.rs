//! Error type for rejected move requests.

use std::fmt;

use super::GameResult;
use crate::board::{Piece, Square, SquareError};

/// Why a command or move request was rejected.
///
/// A rejected request never changes the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Wrong token count or characters outside `[a-hA-H1-8]`
    InvalidSyntax { input: String },
    /// A coordinate outside the board
    OutOfBoard { notation: String },
    /// Source square empty or holding an opponent piece
    WrongPieceOwnership { square: Square },
    /// Destination not reachable by the piece
    IllegalDestination { from: Square, to: Square },
    /// The move would leave the mover's own king attacked
    SelfCheckViolation { from: Square, to: Square },
    /// Promotion choice other than queen, rook, bishop or knight
    InvalidPromotionChoice { piece: Piece },
    /// The game has already ended
    GameOver { result: GameResult },
    /// Draw response without a pending offer
    NoDrawOffer,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidSyntax { input } => {
                write!(f, "Invalid input '{input}', expected e.g. 'e2 e4', 'draw' or 'resign'")
            }
            MoveError::OutOfBoard { notation } => write!(f, "Square '{notation}' is off the board"),
            MoveError::WrongPieceOwnership { square } => {
                write!(f, "No piece of the side to move on {square}")
            }
            MoveError::IllegalDestination { from, to } => {
                write!(f, "The piece on {from} cannot move to {to}")
            }
            MoveError::SelfCheckViolation { from, to } => {
                write!(f, "Moving {from} to {to} would leave the king in check")
            }
            MoveError::InvalidPromotionChoice { piece } => {
                write!(f, "Cannot promote to a {piece}")
            }
            MoveError::GameOver { result } => write!(f, "Game is over: {result}"),
            MoveError::NoDrawOffer => write!(f, "No draw offer is pending"),
        }
    }
}

impl std::error::Error for MoveError {}

impl From<SquareError> for MoveError {
    fn from(err: SquareError) -> Self {
        let notation = match err {
            SquareError::RankOutOfBounds { rank } => format!("rank index {rank}"),
            SquareError::FileOutOfBounds { file } => format!("file index {file}"),
            SquareError::InvalidNotation { notation } => notation,
        };
        MoveError::OutOfBoard { notation }
    }
}
