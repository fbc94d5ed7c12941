//! Move representation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::Piece;
use super::square::Square;

/// How a move updates the board beyond relocating one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    /// Relocation, capturing whatever stands on the destination
    Normal,
    /// Pawn advancing two squares from its start rank
    DoubleStep,
    /// King and rook relocated together
    Castle(CastleSide),
    /// Pawn capture of the pawn standing on `captured`, beside the origin
    EnPassant { captured: Square },
    /// Pawn reaching its last rank, replaced by the given kind
    Promotion(Piece),
}

/// A fully classified move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn normal(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::Normal,
        }
    }

    #[inline]
    #[must_use]
    pub const fn double_step(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::DoubleStep,
        }
    }

    #[inline]
    #[must_use]
    pub const fn castle(from: Square, to: Square, side: CastleSide) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::Castle(side),
        }
    }

    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square, captured: Square) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::EnPassant { captured },
        }
    }

    #[inline]
    #[must_use]
    pub const fn promotion(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            kind: MoveKind::Promotion(piece),
        }
    }

    /// Get the promotion piece, if any
    #[inline]
    #[must_use]
    pub const fn promotion_piece(&self) -> Option<Piece> {
        match self.kind {
            MoveKind::Promotion(piece) => Some(piece),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        matches!(self.kind, MoveKind::Castle(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        matches!(self.kind, MoveKind::EnPassant { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)?;
        if let Some(piece) = self.promotion_piece() {
            write!(f, "={}", piece.letter())?;
        }
        Ok(())
    }
}
