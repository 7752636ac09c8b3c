use thiserror::Error;

use super::types::{GameState, Move};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    OutOfBounds,
    Occupied,
}

impl std::fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMoveReason::OutOfBounds => write!(f, "position out of bounds"),
            InvalidMoveReason::Occupied => write!(f, "cell is already marked"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board size must be at least 3, got {0}")]
    InvalidSize(usize),

    #[error("Invalid move at {mv}: {reason}")]
    InvalidMove { mv: Move, reason: InvalidMoveReason },

    /// Search was asked for a move on a finished game.
    #[error("No move to search for, game is {0}")]
    NoSearchPossible(GameState),
}
