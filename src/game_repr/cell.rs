use serde::{Deserialize, Serialize};

/// The two sides of the game. MAX is the side the evaluator scores for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Max,
    Min,
}

impl Side {
    pub fn opponent(&self) -> Self {
        match self {
            Self::Max => Self::Min,
            Self::Min => Self::Max,
        }
    }

    /// Board cell holding this side's pawn
    pub fn pawn(&self) -> Cell {
        match self {
            Self::Max => Cell::Max,
            Self::Min => Cell::Min,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Max => "MAX",
            Self::Min => "MIN",
        }
    }
}

/// State of a single board cell.
///
/// `Blocked` is final: once a barrier lands on a cell it never changes again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Max,
    Min,
    Blocked,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }

    pub fn is_blocked(&self) -> bool {
        *self == Cell::Blocked
    }

    pub fn is_pawn(&self) -> bool {
        matches!(self, Cell::Max | Cell::Min)
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Max => 'X',
            Cell::Min => 'O',
            Cell::Blocked => '#',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Max),
            'O' | 'o' => Some(Cell::Min),
            '#' => Some(Cell::Blocked),
            _ => None,
        }
    }
}
