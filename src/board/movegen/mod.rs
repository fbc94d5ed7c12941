//! Per-kind reach masks.
//!
//! Targets here are pseudo-legal: geometry, blocking and own-piece exclusion
//! only. King safety, castling and en passant are decided by the game layer.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Bitboard, Board, Piece, Square};

impl Board {
    /// Squares the piece on `from` may move to, ignoring king safety.
    ///
    /// Returns an empty mask for an empty square.
    #[must_use]
    pub fn pseudo_legal_targets(&self, from: Square) -> Bitboard {
        let Some(occupant) = self.occupant(from) else {
            return Bitboard::EMPTY;
        };
        match occupant.piece {
            Piece::Pawn => self.pawn_targets(from, occupant),
            Piece::Knight => self.knight_targets(from, occupant.color),
            Piece::Bishop => self.bishop_targets(from, occupant.color),
            Piece::Rook => self.rook_targets(from, occupant.color),
            Piece::Queen => {
                self.rook_targets(from, occupant.color) | self.bishop_targets(from, occupant.color)
            }
            Piece::King => self.king_targets(from, occupant.color),
        }
    }

    /// Squares the piece on `from` attacks.
    ///
    /// Same as the pseudo-legal targets except for pawns, which attack both
    /// forward diagonals whether or not anything stands there.
    #[must_use]
    pub fn attacks_from(&self, from: Square) -> Bitboard {
        match self.occupant(from) {
            Some(occupant) if occupant.piece == Piece::Pawn => {
                self.pawn_attacks(from, occupant.color)
            }
            Some(_) => self.pseudo_legal_targets(from),
            None => Bitboard::EMPTY,
        }
    }
}
