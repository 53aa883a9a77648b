use super::cell::Cell;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Side length of the (square) board
pub const BOARD_SIZE: usize = 7;

/// Total number of cells
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 8-neighbourhood offsets as (row, col), in the order moves are generated
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Grid membership test on signed coordinates
pub fn is_in_bounds(row: i32, col: i32) -> bool {
    row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    /// Panics if the coordinate is off the board.
    pub const fn new(row: u8, col: u8) -> Self {
        assert!((row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE);
        Self { row, col }
    }

    /// Checked constructor from signed coordinates
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        if is_in_bounds(row, col) {
            Some(Self { row: row as u8, col: col as u8 })
        } else {
            None
        }
    }

    /// False for hand-built coordinates that fall outside the grid
    pub fn is_valid(&self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    pub fn offset(&self, d_row: i32, d_col: i32) -> Option<Self> {
        Self::try_new(self.row as i32 + d_row, self.col as i32 + d_col)
    }

    /// In-bounds cells of the 8-neighbourhood, in `DIRECTIONS` order
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        DIRECTIONS
            .iter()
            .filter_map(move |&(dr, dc)| self.offset(dr, dc))
    }

    /// Chebyshev distance (king-move distance)
    pub fn chebyshev(&self, other: Coord) -> u8 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    pub fn manhattan(&self, other: Coord) -> u8 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Centre cell of the board
    pub fn center() -> Coord {
        let mid = ((BOARD_SIZE - 1) / 2) as u8;
        Coord { row: mid, col: mid }
    }

    /// True for cells on the outermost ring
    pub fn is_on_edge(&self) -> bool {
        let last = (BOARD_SIZE - 1) as u8;
        self.row == 0 || self.col == 0 || self.row == last || self.col == last
    }

    /// Row-major iteration over every cell of the board
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE as u8).flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Coord { row, col }))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Cell grid. Indexed by `Coord`; rows are the outer dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, at: Coord) -> Cell {
        self.cells[at.row as usize][at.col as usize]
    }

    pub fn set(&mut self, at: Coord, cell: Cell) {
        self.cells[at.row as usize][at.col as usize] = cell;
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    pub fn blocked_count(&self) -> usize {
        self.count(Cell::Blocked)
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |&c| self.get(c).is_empty())
    }

    /// Number of Blocked cells in the 8-neighbourhood of `at`
    pub fn blocked_around(&self, at: Coord) -> usize {
        at.neighbors().filter(|&n| self.get(n).is_blocked()).count()
    }

    /// Raw rows, for snapshots handed to external tools
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}

impl Index<Coord> for Board {
    type Output = Cell;

    fn index(&self, at: Coord) -> &Cell {
        &self.cells[at.row as usize][at.col as usize]
    }
}

impl IndexMut<Coord> for Board {
    fn index_mut(&mut self, at: Coord) -> &mut Cell {
        &mut self.cells[at.row as usize][at.col as usize]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|c| c.to_char()).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
