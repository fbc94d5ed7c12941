use super::{play, play_all, setup, sq};
use crate::board::{Color, Move, MoveKind, Piece};
use crate::game::{Game, MoveError};

#[test]
fn test_white_captures_en_passant() {
    let mut game = Game::new();
    play_all(&mut game, &["e2 e4", "a7 a6", "e4 e5", "d7 d5"]);
    assert_eq!(game.en_passant_target(), Some(sq("d5")));

    let report = play(&mut game, "e5 d6").expect("en passant");
    assert_eq!(
        report.mv.kind,
        MoveKind::EnPassant {
            captured: sq("d5")
        }
    );
    assert_eq!(report.captured, Some(Piece::Pawn));
    assert!(game.board().is_empty(sq("d5")));
    assert!(game.board().is_empty(sq("e5")));
    assert_eq!(game.board().piece_at(sq("d6")), Some((Color::White, Piece::Pawn)));
    assert_eq!(game.captured(Color::Black), &[Piece::Pawn]);
    assert_eq!(game.halfmove_clock(), 0);
    assert_eq!(game.en_passant_target(), None);
}

#[test]
fn test_black_captures_en_passant() {
    let mut game = Game::new();
    play_all(&mut game, &["a2 a3", "d7 d5", "a3 a4", "d5 d4", "e2 e4"]);
    play(&mut game, "d4 e3").expect("en passant");
    assert!(game.board().is_empty(sq("e4")));
    assert_eq!(game.board().piece_at(sq("e3")), Some((Color::Black, Piece::Pawn)));
    assert_eq!(game.captured(Color::White), &[Piece::Pawn]);
}

#[test]
fn test_window_lasts_one_ply() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &["e2 e4", "a7 a6", "e4 e5", "d7 d5", "h2 h3", "h7 h6"],
    );
    assert_eq!(game.en_passant_target(), None);
    assert_eq!(
        play(&mut game, "e5 d6"),
        Err(MoveError::IllegalDestination {
            from: sq("e5"),
            to: sq("d6")
        })
    );
}

#[test]
fn test_single_step_opens_no_window() {
    let mut game = Game::new();
    play_all(&mut game, &["e2 e4", "d7 d6", "e4 e5", "d6 d5"]);
    assert_eq!(game.en_passant_target(), None);
    assert!(matches!(
        play(&mut game, "e5 d6"),
        Err(MoveError::IllegalDestination { .. })
    ));
}

#[test]
fn test_enumerated_with_legal_moves() {
    let mut game = Game::new();
    play_all(&mut game, &["e2 e4", "a7 a6", "e4 e5", "f7 f5"]);
    let expected = Move::en_passant(sq("e5"), sq("f6"), sq("f5"));
    assert!(game.legal_moves().contains(&expected));
    game.play(expected).expect("legal");
    assert!(game.board().is_empty(sq("f5")));
}

#[test]
fn test_en_passant_exposing_king_is_rejected() {
    let mut game = setup(
        &[
            ("a5", Color::White, Piece::King),
            ("b5", Color::White, Piece::Pawn),
            ("c7", Color::Black, Piece::Pawn),
            ("h5", Color::Black, Piece::Rook),
            ("h8", Color::Black, Piece::King),
        ],
        Color::Black,
    );
    play(&mut game, "c7 c5").expect("double step");
    assert_eq!(
        play(&mut game, "b5 c6"),
        Err(MoveError::SelfCheckViolation {
            from: sq("b5"),
            to: sq("c6")
        })
    );
    assert!(!game
        .legal_moves()
        .iter()
        .any(|mv| mv.is_en_passant()));
}
