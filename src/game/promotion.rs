use crate::board::{Color, Piece, Square};

/// Supplies the replacement kind when a pawn reaches its last rank.
///
/// Only queen, rook, bishop and knight are accepted; anything else rejects
/// the move. Closures `FnMut(Color, Square) -> Piece` implement this.
pub trait PromotionChooser {
    /// Pick the kind for `color`'s pawn promoting on `square`
    fn choose(&mut self, color: Color, square: Square) -> Piece;
}

impl<F> PromotionChooser for F
where
    F: FnMut(Color, Square) -> Piece,
{
    fn choose(&mut self, color: Color, square: Square) -> Piece {
        self(color, square)
    }
}
