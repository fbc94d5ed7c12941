//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-kind reach masks
//! - `check.rs` - Attack maps, check detection and move preview
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `proptest.rs` - Property-based tests

mod movegen;

use crate::board::{Board, BoardBuilder, Color, Piece, Square};

pub(super) fn sq(notation: &str) -> Square {
    notation.parse().expect("valid square")
}

/// Build a board from `(square, color, piece)` triples.
pub(super) fn position(pieces: &[(&str, Color, Piece)]) -> Board {
    pieces
        .iter()
        .fold(BoardBuilder::new(), |b, &(s, color, piece)| {
            b.piece(sq(s), color, piece)
        })
        .build()
}
