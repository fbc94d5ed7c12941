use super::{play, play_all, setup, sq};
use crate::board::{CastleSide, Color, Move, MoveKind, Piece};
use crate::game::{Game, MoveError};

fn castling_position() -> Game {
    setup(
        &[
            ("e1", Color::White, Piece::King),
            ("a1", Color::White, Piece::Rook),
            ("h1", Color::White, Piece::Rook),
            ("e8", Color::Black, Piece::King),
        ],
        Color::White,
    )
}

fn castles(game: &mut Game) -> Vec<Move> {
    game.legal_moves()
        .into_iter()
        .filter(|mv| mv.is_castling())
        .collect()
}

#[test]
fn test_kingside() {
    let mut game = castling_position();
    let report = play(&mut game, "e1 g1").expect("castle");
    assert_eq!(report.mv.kind, MoveKind::Castle(CastleSide::KingSide));
    assert_eq!(game.board().piece_at(sq("g1")), Some((Color::White, Piece::King)));
    assert_eq!(game.board().piece_at(sq("f1")), Some((Color::White, Piece::Rook)));
    assert!(game.board().is_empty(sq("e1")));
    assert!(game.board().is_empty(sq("h1")));
    assert_eq!(game.halfmove_clock(), 1);
}

#[test]
fn test_queenside() {
    let mut game = castling_position();
    let report = play(&mut game, "e1 c1").expect("castle");
    assert_eq!(report.mv.kind, MoveKind::Castle(CastleSide::QueenSide));
    assert_eq!(game.board().piece_at(sq("c1")), Some((Color::White, Piece::King)));
    assert_eq!(game.board().piece_at(sq("d1")), Some((Color::White, Piece::Rook)));
    assert!(game.board().is_empty(sq("a1")));
}

#[test]
fn test_both_sides_enumerated() {
    let mut game = castling_position();
    assert_eq!(castles(&mut game).len(), 2);
}

#[test]
fn test_king_moved_and_returned() {
    let mut game = castling_position();
    play_all(&mut game, &["e1 e2", "e8 d8", "e2 e1", "d8 e8"]);
    assert_eq!(
        play(&mut game, "e1 g1"),
        Err(MoveError::IllegalDestination {
            from: sq("e1"),
            to: sq("g1")
        })
    );
    assert!(matches!(
        play(&mut game, "e1 c1"),
        Err(MoveError::IllegalDestination { .. })
    ));
    assert!(castles(&mut game).is_empty());
}

#[test]
fn test_rook_moved_and_returned() {
    let mut game = castling_position();
    play_all(&mut game, &["h1 h2", "e8 d8", "h2 h1", "d8 e8"]);
    assert!(matches!(
        play(&mut game, "e1 g1"),
        Err(MoveError::IllegalDestination { .. })
    ));
    play(&mut game, "e1 c1").expect("queenside rook never moved");
}

#[test]
fn test_transit_square_attacked() {
    let mut game = setup(
        &[
            ("e1", Color::White, Piece::King),
            ("a1", Color::White, Piece::Rook),
            ("h1", Color::White, Piece::Rook),
            ("e8", Color::Black, Piece::King),
            ("f8", Color::Black, Piece::Rook),
        ],
        Color::White,
    );
    assert!(matches!(
        play(&mut game, "e1 g1"),
        Err(MoveError::IllegalDestination { .. })
    ));
    play(&mut game, "e1 c1").expect("queenside is safe");
}

#[test]
fn test_destination_attacked() {
    let mut game = setup(
        &[
            ("e1", Color::White, Piece::King),
            ("h1", Color::White, Piece::Rook),
            ("e8", Color::Black, Piece::King),
            ("g8", Color::Black, Piece::Rook),
        ],
        Color::White,
    );
    assert!(matches!(
        play(&mut game, "e1 g1"),
        Err(MoveError::IllegalDestination { .. })
    ));
}

#[test]
fn test_attacked_rook_side_square_is_allowed() {
    let mut game = setup(
        &[
            ("e1", Color::White, Piece::King),
            ("a1", Color::White, Piece::Rook),
            ("h8", Color::Black, Piece::King),
            ("b8", Color::Black, Piece::Rook),
        ],
        Color::White,
    );
    play(&mut game, "e1 c1").expect("b1 may be attacked");
}

#[test]
fn test_not_out_of_check() {
    let mut game = setup(
        &[
            ("e1", Color::White, Piece::King),
            ("a1", Color::White, Piece::Rook),
            ("h1", Color::White, Piece::Rook),
            ("b8", Color::Black, Piece::King),
            ("e8", Color::Black, Piece::Rook),
        ],
        Color::White,
    );
    assert!(game.is_in_check());
    assert!(castles(&mut game).is_empty());
    assert!(matches!(
        play(&mut game, "e1 g1"),
        Err(MoveError::IllegalDestination { .. })
    ));
}

#[test]
fn test_pieces_in_between() {
    let mut game = Game::new();
    assert!(matches!(
        play(&mut game, "e1 g1"),
        Err(MoveError::IllegalDestination { .. })
    ));

    play_all(&mut game, &["g1 f3", "a7 a6", "g2 g3", "a6 a5", "f1 g2", "a5 a4"]);
    play(&mut game, "e1 g1").expect("path cleared");
}

#[test]
fn test_black_castles() {
    let mut game = setup(
        &[
            ("e1", Color::White, Piece::King),
            ("e8", Color::Black, Piece::King),
            ("a8", Color::Black, Piece::Rook),
            ("h8", Color::Black, Piece::Rook),
        ],
        Color::Black,
    );
    play(&mut game, "e8 g8").expect("castle");
    assert_eq!(game.board().piece_at(sq("f8")), Some((Color::Black, Piece::Rook)));
    assert_eq!(game.board().piece_at(sq("g8")), Some((Color::Black, Piece::King)));
}
