use super::super::attack_tables::KNIGHT_ATTACKS;
use super::super::{Bitboard, Board, Color, Square};

impl Board {
    pub(crate) fn knight_targets(&self, from: Square, color: Color) -> Bitboard {
        KNIGHT_ATTACKS[from.as_index()] & !self.occupied_by(color)
    }
}
