//! Errors reported when validating moves and parsing positions

use super::board::Coord;
use super::cell::Side;
use thiserror::Error;

/// Why a move was rejected by `GameState::try_apply_move`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MoveError {
    #[error("game is over: {side} has no legal step")]
    GameOver { side: &'static str },

    #[error("step target {to} is off the board")]
    StepOutOfBounds { to: Coord },

    #[error("step from {from} to {to} is not a one-cell step")]
    StepNotAdjacent { from: Coord, to: Coord },

    #[error("step target {to} is blocked")]
    StepBlocked { to: Coord },

    #[error("step target {to} is occupied by a pawn")]
    StepOccupied { to: Coord },

    #[error("barrier target {at} is off the board")]
    BarrierOutOfBounds { at: Coord },

    #[error("barrier target {at} is not empty after the step")]
    BarrierNotEmpty { at: Coord },
}

impl MoveError {
    pub(crate) fn game_over(side: Side) -> Self {
        MoveError::GameOver { side: side.name() }
    }
}

/// Failure to build a `GameState` from its text form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    #[error("expected {expected} rows, got {got}")]
    RowCount { expected: usize, got: usize },

    #[error("row {row} has {got} cells, expected {expected}")]
    RowLength { row: usize, expected: usize, got: usize },

    #[error("invalid character '{character}' at row {row}, column {col}")]
    InvalidCharacter { character: char, row: usize, col: usize },

    #[error("expected exactly one {side} pawn, found {found}")]
    PawnCount { side: &'static str, found: usize },
}
