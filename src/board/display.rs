//! Text rendering of boards and reach masks.

use std::fmt;

use super::{Bitboard, Board, Square};

const FILE_FOOTER: &str = "   a  b  c  d  e  f  g  h";

/// Rank 8 on top. Pieces are shown as color prefix plus kind letter
/// (`WP`, `BK`), empty squares as `--`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{}", rank + 1)?;
            for file in 0..8 {
                match self.occupant(Square(rank, file)) {
                    Some(occupant) => write!(f, " {occupant}")?,
                    None => write!(f, " --")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "{FILE_FOOTER}")
    }
}

/// Grid of `x` for set squares and `.` for the rest, rank 8 on top.
impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{}", rank + 1)?;
            for file in 0..8 {
                let ch = if self.contains(Square(rank, file)) { 'x' } else { '.' };
                write!(f, "  {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "{FILE_FOOTER}")
    }
}
