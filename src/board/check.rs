//! Attack and check evaluation.

use super::{Bitboard, Board, Color, Move, Square};

impl Board {
    /// Union of every square attacked by `color`'s pieces
    #[must_use]
    pub fn attacked_by(&self, color: Color) -> Bitboard {
        self.pieces_of(color)
            .fold(Bitboard::EMPTY, |acc, (sq, _)| acc | self.attacks_from(sq))
    }

    /// Returns true if any piece of color `by` attacks `sq`
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        self.pieces_of(by)
            .any(|(from, _)| self.attacks_from(from).contains(sq))
    }

    /// Returns true if `color`'s king is attacked.
    ///
    /// A side without a king is never in check; positions reached through
    /// [`crate::Game`] always have both kings.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        let king = self.find_king(color);
        debug_assert!(king.is_some(), "{color} has no king");
        king.is_some_and(|sq| self.is_square_attacked(sq, color.opponent()))
    }

    /// Apply `mv`, test whether the mover's king is attacked, and restore
    /// the board exactly as it was, moved flags included.
    pub fn leaves_king_in_check(&mut self, mv: &Move) -> bool {
        let Some(mover) = self.color_on(mv.from) else {
            return false;
        };
        let info = self.make_move(mv);
        let in_check = self.is_in_check(mover);
        self.unmake_move(&info);
        in_check
    }
}
