use crate::board::{Color, Piece};

/// Pieces taken off the board, per color of the captured piece.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapturedRoster {
    white: Vec<Piece>,
    black: Vec<Piece>,
}

impl CapturedRoster {
    pub(crate) fn record(&mut self, color: Color, piece: Piece) {
        match color {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }

    /// `color`'s pieces that have been captured, in capture order
    #[must_use]
    pub fn of(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.white.len() + self.black.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_by_captured_color() {
        let mut roster = CapturedRoster::default();
        roster.record(Color::Black, Piece::Pawn);
        roster.record(Color::Black, Piece::Knight);
        roster.record(Color::White, Piece::Queen);

        assert_eq!(roster.of(Color::Black), &[Piece::Pawn, Piece::Knight]);
        assert_eq!(roster.of(Color::White), &[Piece::Queen]);
        assert_eq!(roster.total(), 3);
    }
}
