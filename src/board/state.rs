use super::{Bitboard, Color, Occupant, Piece, Square};

/// The 8x8 grid. Each square holds exactly one value: a piece or nothing.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) squares: [[Option<Occupant>; 8]; 8],
}

impl Board {
    /// The standard initial position, no piece moved yet.
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (i, piece) in back_rank.iter().enumerate() {
            board.put(Square(0, i), Occupant::new(Color::White, *piece));
            board.put(Square(7, i), Occupant::new(Color::Black, *piece));
            board.put(Square(1, i), Occupant::new(Color::White, Piece::Pawn));
            board.put(Square(6, i), Occupant::new(Color::Black, Piece::Pawn));
        }
        board
    }

    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The piece on a square, with its moved flag
    #[inline]
    #[must_use]
    pub fn occupant(&self, sq: Square) -> Option<Occupant> {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.occupant(sq).map(|o| (o.color, o.piece))
    }

    /// Get just the color of the piece on a square
    #[inline]
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.occupant(sq).map(|o| o.color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.occupant(sq).is_none()
    }

    /// Place a piece, returning whatever stood there before
    pub(crate) fn put(&mut self, sq: Square, occupant: Occupant) -> Option<Occupant> {
        self.squares[sq.0][sq.1].replace(occupant)
    }

    pub(crate) fn remove(&mut self, sq: Square) -> Option<Occupant> {
        self.squares[sq.0][sq.1].take()
    }

    pub(crate) fn restore(&mut self, sq: Square, content: Option<Occupant>) {
        self.squares[sq.0][sq.1] = content;
    }

    /// Every piece of one color with its square, a1 first
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Occupant)> + '_ {
        Square::all().filter_map(move |sq| {
            self.occupant(sq)
                .filter(|o| o.color == color)
                .map(|o| (sq, o))
        })
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, o)| o.piece == Piece::King)
            .map(|(sq, _)| sq)
    }

    /// Squares occupied by one color
    #[must_use]
    pub fn occupied_by(&self, color: Color) -> Bitboard {
        self.pieces_of(color).map(|(sq, _)| sq).collect()
    }

    /// Kinds of one color's pieces other than the king, sorted
    #[must_use]
    pub fn non_king_material(&self, color: Color) -> Vec<Piece> {
        let mut material: Vec<Piece> = self
            .pieces_of(color)
            .map(|(_, o)| o.piece)
            .filter(|&p| p != Piece::King)
            .collect();
        material.sort_unstable();
        material
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Position identity: same kind and color on every square.
///
/// Moved flags are ignored, so two positions that differ only in castling
/// or double-step eligibility compare equal.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        Square::all().all(|sq| self.piece_at(sq) == other.piece_at(sq))
    }
}

impl Eq for Board {}
