use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Color;

/// Outcome of a game, or `InProgress` while it continues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    #[default]
    InProgress,
    Checkmate {
        winner: Color,
    },
    Stalemate,
    DrawFiftyMove,
    DrawRepetition,
    DrawInsufficientMaterial,
    DrawAgreed,
    Resignation {
        winner: Color,
    },
}

impl GameResult {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// The winning side, for decisive results
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::Checkmate { winner } | GameResult::Resignation { winner } => Some(winner),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_draw(self) -> bool {
        matches!(
            self,
            GameResult::Stalemate
                | GameResult::DrawFiftyMove
                | GameResult::DrawRepetition
                | GameResult::DrawInsufficientMaterial
                | GameResult::DrawAgreed
        )
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "in progress"),
            GameResult::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameResult::Stalemate => write!(f, "stalemate, draw"),
            GameResult::DrawFiftyMove => write!(f, "draw by the fifty-move rule"),
            GameResult::DrawRepetition => write!(f, "draw by threefold repetition"),
            GameResult::DrawInsufficientMaterial => write!(f, "draw by insufficient material"),
            GameResult::DrawAgreed => write!(f, "draw by agreement"),
            GameResult::Resignation { winner } => {
                write!(f, "{} resigns, {winner} wins", winner.opponent())
            }
        }
    }
}
