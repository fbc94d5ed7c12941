use super::super::attack_tables::KING_ATTACKS;
use super::super::{Bitboard, Board, Color, Square};

impl Board {
    /// One step in any direction. Castling is not a king target here.
    pub(crate) fn king_targets(&self, from: Square, color: Color) -> Bitboard {
        KING_ATTACKS[from.as_index()] & !self.occupied_by(color)
    }
}
