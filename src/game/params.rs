#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunable draw rule thresholds.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RuleParams {
    /// Half-moves without a pawn move or capture before the game is drawn
    pub fifty_move_limit: u32,
    /// Occurrences of one position that draw the game
    pub repetition_threshold: usize,
}

impl Default for RuleParams {
    fn default() -> Self {
        RuleParams {
            fifty_move_limit: 50,
            repetition_threshold: 3,
        }
    }
}
