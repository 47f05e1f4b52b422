//! Error type shared by every module in the crate.
//!
//! All variants are contract violations by the calling layer. The engine
//! never recovers from them internally.

use derive_more::{Display, Error};

use crate::core::Action;

/// Crate-wide error.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
#[non_exhaustive]
pub enum Error {
    /// The action targets an occupied cell or lies outside the 3x3 grid.
    #[display("invalid action {action}: cell is occupied or out of range")]
    InvalidAction { action: Action },

    /// An operation needing a non-terminal board was given a finished one.
    #[display("invalid state: {reason}")]
    InvalidState { reason: String },

    /// Mark counts break the X-moves-first invariant.
    #[display("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidBoard { x_count: usize, o_count: usize },

    /// Board text did not contain exactly nine cells.
    #[display("board text has {got} cells, expected {expected}")]
    InvalidBoardLength { expected: usize, got: usize },

    /// Board text contained an unrecognized character.
    #[display("invalid character '{character}' at cell {position}")]
    InvalidCell { character: char, position: usize },

    /// Difficulty name is not one of easy, medium, hard.
    #[display("unknown difficulty '{name}' (expected easy, medium or hard)")]
    UnknownDifficulty { name: String },

    /// Policy configuration is out of range.
    #[display("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_state(reason: impl Into<String>) -> Self {
        Error::InvalidState {
            reason: reason.into(),
        }
    }
}
