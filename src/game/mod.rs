//! Game flow: move validation and classification, commit, draw and
//! checkmate detection.
//!
//! A [`Game`] owns the board together with everything a position needs
//! beyond piece placement: side to move, half-move clock, the single-ply
//! en passant window, position history and the captured-piece roster.

mod command;
pub mod draw;
mod error;
mod params;
mod promotion;
mod result;
mod roster;
mod state;

#[cfg(test)]
mod tests;

pub use command::Command;
pub use error::MoveError;
pub use params::RuleParams;
pub use promotion::PromotionChooser;
pub use result::GameResult;
pub use roster::CapturedRoster;
pub use state::{Game, MoveReport};
