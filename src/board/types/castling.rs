//! Castling geometry.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// File the king starts on (e-file) for both colors
pub(crate) const KING_HOME_FILE: usize = 4;

/// The two castling directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// The side selected by a king moving from the e-file to `file`
    #[must_use]
    pub const fn from_king_target(file: usize) -> Option<Self> {
        match file {
            6 => Some(CastleSide::KingSide),
            2 => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    /// File of the rook that takes part
    #[inline]
    #[must_use]
    pub const fn rook_file(self) -> usize {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// File the king lands on
    #[inline]
    #[must_use]
    pub const fn king_target_file(self) -> usize {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// File the rook lands on, which is also the square the king passes over
    #[inline]
    #[must_use]
    pub const fn rook_target_file(self) -> usize {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// Files strictly between king and rook; all must be empty
    #[inline]
    #[must_use]
    pub const fn between_files(self) -> &'static [usize] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[1, 2, 3],
        }
    }

    /// Files the king stands on, crosses, or lands on; none may be attacked
    #[inline]
    #[must_use]
    pub const fn king_path_files(self) -> [usize; 3] {
        [
            KING_HOME_FILE,
            self.rook_target_file(),
            self.king_target_file(),
        ]
    }
}
