//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece. Moved flags are inferred from
//! placement: a pawn off its start rank, or a king or rook off its home
//! square, is marked as moved. Use [`BoardBuilder::moved`] to mark anything
//! else.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .build();
//! assert_eq!(board.find_king(Color::Black), Some(Square(7, 4)));
//! ```

use super::{Board, Color, Occupant, Piece, Square, KING_HOME_FILE};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    moved: Vec<Square>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let mut builder = Self::new();
        for color in Color::BOTH {
            for (sq, occupant) in board.pieces_of(color) {
                builder = builder.piece(sq, color, occupant.piece);
            }
        }
        builder
    }

    /// Place a piece, replacing anything already on the square.
    #[must_use]
    pub fn piece(mut self, sq: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(s, _, _)| *s != sq);
        self.pieces.push((sq, color, piece));
        self
    }

    /// Remove whatever is on a square.
    #[must_use]
    pub fn clear(mut self, sq: Square) -> Self {
        self.pieces.retain(|(s, _, _)| *s != sq);
        self
    }

    /// Mark the piece on `sq` as having moved.
    #[must_use]
    pub fn moved(mut self, sq: Square) -> Self {
        self.moved.push(sq);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for &(sq, color, piece) in &self.pieces {
            let mut occupant = Occupant::new(color, piece);
            if self.moved.contains(&sq) || !on_home_square(sq, color, piece) {
                occupant = occupant.moved();
            }
            board.put(sq, occupant);
        }
        board
    }
}

fn on_home_square(sq: Square, color: Color, piece: Piece) -> bool {
    match piece {
        Piece::Pawn => sq.rank() == color.pawn_start_rank(),
        Piece::King => sq == Square(color.back_rank(), KING_HOME_FILE),
        Piece::Rook => sq.rank() == color.back_rank() && (sq.file() == 0 || sq.file() == 7),
        Piece::Knight | Piece::Bishop | Piece::Queen => true,
    }
}
