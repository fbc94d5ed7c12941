use super::super::attack_tables::PAWN_ATTACKS;
use super::super::{Bitboard, Board, Color, Occupant, Square};

impl Board {
    pub(crate) fn pawn_targets(&self, from: Square, pawn: Occupant) -> Bitboard {
        let dir = pawn.color.pawn_direction();
        let mut targets = Bitboard::EMPTY;

        if let Some(one) = from.offset(dir, 0).filter(|&sq| self.is_empty(sq)) {
            targets.insert(one);
            if !pawn.has_moved {
                if let Some(two) = one.offset(dir, 0).filter(|&sq| self.is_empty(sq)) {
                    targets.insert(two);
                }
            }
        }

        let enemies = self.occupied_by(pawn.color.opponent());
        targets | (PAWN_ATTACKS[pawn.color.index()][from.as_index()] & enemies)
    }

    pub(crate) fn pawn_attacks(&self, from: Square, color: Color) -> Bitboard {
        PAWN_ATTACKS[color.index()][from.as_index()] & !self.occupied_by(color)
    }
}
