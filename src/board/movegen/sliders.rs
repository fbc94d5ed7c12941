use super::super::attack_tables::{DIAGONAL, ORTHOGONAL};
use super::super::{Bitboard, Board, Color, Square};

impl Board {
    /// Walk each ray until the edge or the first occupied square. An enemy
    /// blocker is included, an own blocker is not.
    fn ray_targets(&self, from: Square, color: Color, directions: &[(isize, isize)]) -> Bitboard {
        let mut targets = Bitboard::EMPTY;
        for &(dr, df) in directions {
            let mut current = from.offset(dr, df);
            while let Some(sq) = current {
                match self.color_on(sq) {
                    None => targets.insert(sq),
                    Some(c) => {
                        if c != color {
                            targets.insert(sq);
                        }
                        break;
                    }
                }
                current = sq.offset(dr, df);
            }
        }
        targets
    }

    pub(crate) fn rook_targets(&self, from: Square, color: Color) -> Bitboard {
        self.ray_targets(from, color, &ORTHOGONAL)
    }

    pub(crate) fn bishop_targets(&self, from: Square, color: Color) -> Bitboard {
        self.ray_targets(from, color, &DIAGONAL)
    }
}
