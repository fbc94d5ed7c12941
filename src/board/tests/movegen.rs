use super::{position, sq};
use crate::board::{Bitboard, Board, Color, Piece};

fn targets_of(board: &Board, from: &str) -> Vec<String> {
    let mut names: Vec<String> = board
        .pseudo_legal_targets(sq(from))
        .iter()
        .map(|s| s.to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn test_initial_position_reach() {
    let board = Board::new();
    assert_eq!(targets_of(&board, "e2"), vec!["e3", "e4"]);
    assert_eq!(targets_of(&board, "g1"), vec!["f3", "h3"]);
    assert_eq!(targets_of(&board, "b8"), vec!["a6", "c6"]);
    for blocked in ["a1", "c1", "d1", "e1", "f8", "h8"] {
        assert!(board.pseudo_legal_targets(sq(blocked)).is_empty(), "{blocked}");
    }
}

#[test]
fn test_empty_square_has_no_targets() {
    let board = Board::new();
    assert_eq!(board.pseudo_legal_targets(sq("e4")), Bitboard::EMPTY);
    assert_eq!(board.attacks_from(sq("e4")), Bitboard::EMPTY);
}

#[test]
fn test_pawn_double_step_needs_both_squares_empty() {
    let blocked_near = position(&[
        ("e2", Color::White, Piece::Pawn),
        ("e3", Color::Black, Piece::Knight),
    ]);
    assert!(targets_of(&blocked_near, "e2").is_empty());

    let blocked_far = position(&[
        ("e2", Color::White, Piece::Pawn),
        ("e4", Color::Black, Piece::Knight),
    ]);
    assert_eq!(targets_of(&blocked_far, "e2"), vec!["e3"]);
}

#[test]
fn test_moved_pawn_single_step_only() {
    let board = position(&[("e3", Color::White, Piece::Pawn)]);
    assert_eq!(targets_of(&board, "e3"), vec!["e4"]);

    let black = position(&[("c7", Color::Black, Piece::Pawn)]);
    assert_eq!(targets_of(&black, "c7"), vec!["c5", "c6"]);
}

#[test]
fn test_pawn_captures_only_enemies() {
    let board = position(&[
        ("d4", Color::White, Piece::Pawn),
        ("c5", Color::Black, Piece::Rook),
        ("e5", Color::White, Piece::Knight),
    ]);
    assert_eq!(targets_of(&board, "d4"), vec!["c5", "d5"]);
}

#[test]
fn test_pawn_on_edge_does_not_wrap() {
    let board = position(&[
        ("a4", Color::White, Piece::Pawn),
        ("b5", Color::Black, Piece::Pawn),
        ("h5", Color::Black, Piece::Pawn),
    ]);
    assert_eq!(targets_of(&board, "a4"), vec!["a5", "b5"]);
}

#[test]
fn test_rook_rays_stop_at_blockers() {
    let board = position(&[
        ("d4", Color::White, Piece::Rook),
        ("d6", Color::White, Piece::Pawn),
        ("f4", Color::Black, Piece::Knight),
    ]);
    assert_eq!(
        targets_of(&board, "d4"),
        vec!["a4", "b4", "c4", "d1", "d2", "d3", "d5", "e4", "f4"]
    );
}

#[test]
fn test_slider_counts_on_open_board() {
    let bishop = position(&[("a1", Color::White, Piece::Bishop)]);
    assert_eq!(bishop.pseudo_legal_targets(sq("a1")).popcount(), 7);

    let queen = position(&[("d4", Color::Black, Piece::Queen)]);
    assert_eq!(queen.pseudo_legal_targets(sq("d4")).popcount(), 27);

    let rook = position(&[("h8", Color::Black, Piece::Rook)]);
    assert_eq!(rook.pseudo_legal_targets(sq("h8")).popcount(), 14);
}

#[test]
fn test_leapers() {
    let board = position(&[
        ("a1", Color::White, Piece::Knight),
        ("b3", Color::White, Piece::Pawn),
        ("e1", Color::White, Piece::King),
        ("e2", Color::Black, Piece::Pawn),
    ]);
    assert_eq!(targets_of(&board, "a1"), vec!["c2"]);
    assert_eq!(targets_of(&board, "e1"), vec!["d1", "d2", "e2", "f1", "f2"]);
}

#[test]
fn test_pawn_attacks_ignore_occupancy() {
    let board = Board::new();
    let attacks = board.attacks_from(sq("e2"));
    assert_eq!(attacks.popcount(), 2);
    assert!(attacks.contains(sq("d3")));
    assert!(attacks.contains(sq("f3")));
    assert!(!attacks.contains(sq("e3")));
}
