//! Move execution and exact reversal.

use super::{Board, Move, MoveKind, Occupant, Square};

/// Everything needed to undo one [`Board::make_move`].
///
/// Holds the prior content of every square the move touched: two for
/// ordinary moves and promotions, three for en passant, four for castling.
#[derive(Clone, Copy, Debug)]
pub struct UnmakeInfo {
    saved: [(Square, Option<Occupant>); 4],
    len: usize,
    captured: Option<Occupant>,
}

impl UnmakeInfo {
    fn new() -> Self {
        UnmakeInfo {
            saved: [(Square(0, 0), None); 4],
            len: 0,
            captured: None,
        }
    }

    fn save(&mut self, board: &Board, sq: Square) {
        self.saved[self.len] = (sq, board.occupant(sq));
        self.len += 1;
    }

    /// The piece removed from the board by this move, if any
    #[inline]
    #[must_use]
    pub fn captured(&self) -> Option<Occupant> {
        self.captured
    }
}

impl Board {
    /// Apply a classified move. No legality checking is done here.
    ///
    /// The mover's moved flag is set; for castling the rook's is set too.
    /// An empty origin square leaves the board unchanged.
    pub fn make_move(&mut self, mv: &Move) -> UnmakeInfo {
        let mut info = UnmakeInfo::new();
        let Some(mover) = self.occupant(mv.from) else {
            debug_assert!(false, "make_move from empty square {}", mv.from);
            return info;
        };

        info.save(self, mv.from);
        info.save(self, mv.to);

        match mv.kind {
            MoveKind::Normal | MoveKind::DoubleStep => {
                self.remove(mv.from);
                info.captured = self.put(mv.to, mover.moved());
            }
            MoveKind::Promotion(piece) => {
                self.remove(mv.from);
                let promoted = Occupant::new(mover.color, piece).moved();
                info.captured = self.put(mv.to, promoted);
            }
            MoveKind::EnPassant { captured } => {
                info.save(self, captured);
                self.remove(mv.from);
                self.put(mv.to, mover.moved());
                info.captured = self.remove(captured);
            }
            MoveKind::Castle(side) => {
                let rank = mv.from.rank();
                let rook_from = Square(rank, side.rook_file());
                let rook_to = Square(rank, side.rook_target_file());
                info.save(self, rook_from);
                info.save(self, rook_to);

                self.remove(mv.from);
                self.put(mv.to, mover.moved());
                if let Some(rook) = self.remove(rook_from) {
                    self.put(rook_to, rook.moved());
                }
            }
        }

        info
    }

    /// Restore the board to its state before the matching `make_move`.
    pub fn unmake_move(&mut self, info: &UnmakeInfo) {
        for &(sq, content) in info.saved[..info.len].iter().rev() {
            self.restore(sq, content);
        }
    }
}
