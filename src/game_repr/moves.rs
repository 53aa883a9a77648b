use super::board::Coord;
use serde::{Deserialize, Serialize};
use std::fmt;

/*-------ARCHITECTURE--------*/

// A full turn is two actions by the same player:
// | step    | pawn moves one cell (8-directional)  |
// | barrier | one Empty cell becomes Blocked       |
// The barrier is checked against the board *after* the step,
// so the vacated cell is a legal barrier target.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Destination of the active pawn
    pub step: Coord,
    /// Cell that becomes Blocked after the step
    pub barrier: Coord,
}

impl Move {
    pub fn new(step: Coord, barrier: Coord) -> Move {
        Self { step, barrier }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {} barrier {}", self.step, self.barrier)
    }
}
