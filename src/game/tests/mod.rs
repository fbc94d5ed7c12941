//! Game module tests.
//!
//! - `flow.rs` - Turn order, request validation, draw offers and resignation
//! - `castling.rs` - Castling conditions
//! - `en_passant.rs` - En passant window and execution
//! - `promotion.rs` - Promotion choices
//! - `draws.rs` - Fifty-move rule, repetition and insufficient material
//! - `terminal.rs` - Checkmate and stalemate

mod castling;
mod en_passant;

use crate::board::{BoardBuilder, Color, Piece, Square};
use crate::game::{Command, Game, MoveError, MoveReport};

pub(super) fn sq(notation: &str) -> Square {
    notation.parse().expect("valid square")
}

pub(super) fn queen(_: Color, _: Square) -> Piece {
    Piece::Queen
}

/// Play `"e2 e4"` style moves, promoting to a queen.
pub(super) fn play(game: &mut Game, input: &str) -> Result<MoveReport, MoveError> {
    match input.parse::<Command>()? {
        Command::Move { from, to } => game.play_move(from, to, &mut queen),
        other => panic!("not a move: {other:?}"),
    }
}

pub(super) fn play_all(game: &mut Game, moves: &[&str]) {
    for input in moves {
        play(game, input).unwrap_or_else(|err| panic!("{input}: {err}"));
    }
}

pub(super) fn setup(pieces: &[(&str, Color, Piece)], to_move: Color) -> Game {
    let board = pieces
        .iter()
        .fold(BoardBuilder::new(), |b, &(s, color, piece)| {
            b.piece(sq(s), color, piece)
        })
        .build();
    Game::from_position(board, to_move).expect("valid position")
}
