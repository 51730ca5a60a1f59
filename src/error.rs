//! Error types returned by the engine.
//!
//! A rejected call never mutates the game: every variant here describes a
//! request that was refused before any state changed.

use thiserror::Error;

use crate::constants::SUPPORTED_SIZES;

/// Why a placement on an in-bounds point was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalReason {
    /// Point is not empty
    #[error("point not empty")]
    Occupied,
    /// Point is the mover's own previous placement
    #[error("retakes ko")]
    Ko,
    /// Point is fully surrounded and the move would capture nothing
    #[error("suicide")]
    Suicide,
}

/// Result of attempting to play a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("coordinates ({row}, {col}) are outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },
    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalReason),
    #[error("game is over")]
    GameOver,
}

/// Requested board size is not one of [`SUPPORTED_SIZES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unsupported board size {0}, expected one of {sizes:?}", sizes = SUPPORTED_SIZES)]
pub struct BoardSizeError(pub usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = MoveError::from(IllegalReason::Ko);
        assert_eq!(err.to_string(), "illegal move: retakes ko");

        let err = MoveError::OutOfBounds {
            row: 9,
            col: 0,
            size: 9,
        };
        assert_eq!(err.to_string(), "coordinates (9, 0) are outside the 9x9 board");

        assert_eq!(
            BoardSizeError(7).to_string(),
            "unsupported board size 7, expected one of [9, 13, 19]"
        );
    }
}
