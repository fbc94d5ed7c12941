//! Draw conditions: fifty-move rule, repetition and insufficient material.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use super::{GameResult, RuleParams};
use crate::board::{Board, Color, Piece};

/// Non-king material pairs `(white, black)` that can never force mate.
static DRAWN_MATERIAL: Lazy<HashSet<(Vec<Piece>, Vec<Piece>)>> = Lazy::new(|| {
    let minor = [vec![], vec![Piece::Bishop], vec![Piece::Knight]];
    let mut drawn = HashSet::new();
    for side in &minor {
        drawn.insert((Vec::new(), side.clone()));
        drawn.insert((side.clone(), Vec::new()));
    }
    drawn
});

/// King vs king, king vs king and bishop, or king vs king and knight.
#[must_use]
pub fn is_insufficient_material(board: &Board) -> bool {
    let key = (
        board.non_king_material(Color::White),
        board.non_king_material(Color::Black),
    );
    DRAWN_MATERIAL.contains(&key)
}

#[inline]
#[must_use]
pub fn is_fifty_move_draw(halfmove_clock: u32, params: &RuleParams) -> bool {
    halfmove_clock >= params.fifty_move_limit
}

/// Occurrences of the newest snapshot in `history`, itself included.
#[must_use]
pub fn repetition_count(history: &[Board]) -> usize {
    match history.last() {
        Some(latest) => history.iter().filter(|board| *board == latest).count(),
        None => 0,
    }
}

/// Returns true once the newest position has occurred `threshold` times.
#[must_use]
pub fn is_repetition(history: &[Board], threshold: usize) -> bool {
    !history.is_empty() && repetition_count(history) >= threshold
}

/// The first draw that applies, checked in material, clock, repetition order.
pub(crate) fn detect(
    board: &Board,
    halfmove_clock: u32,
    history: &[Board],
    params: &RuleParams,
) -> Option<GameResult> {
    if is_insufficient_material(board) {
        Some(GameResult::DrawInsufficientMaterial)
    } else if is_fifty_move_draw(halfmove_clock, params) {
        Some(GameResult::DrawFiftyMove)
    } else if is_repetition(history, params.repetition_threshold) {
        Some(GameResult::DrawRepetition)
    } else {
        None
    }
}
