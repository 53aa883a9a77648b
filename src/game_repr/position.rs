use super::board::{Board, Coord, BOARD_SIZE};
use super::cell::{Cell, Side};
use super::error::{MoveError, ParseError};
use super::moves::Move;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND LOGIC
 */

/// At most eight one-cell steps exist from any cell
pub type StepList = SmallVec<[Coord; 8]>;

/// Starting cell of the MAX pawn (top mid-edge)
pub const MAX_START: Coord = Coord::new(0, 3);

/// Starting cell of the MIN pawn (bottom mid-edge)
pub const MIN_START: Coord = Coord::new(6, 3);

/// Full game state.
///
/// Pawn coordinates are kept alongside the board for O(1) access and always
/// match the corresponding pawn cell. The state is `Copy`: every transition
/// produces a new value and never touches one already referenced by a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    max_pawn: Coord,
    min_pawn: Coord,
    to_move: Side,
    /// Full turns (step + barrier) applied so far
    turn: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fixed opening: pawns on opposite mid-edges, empty board, MIN to move.
    pub fn new() -> GameState {
        let mut board = Board::empty();
        board.set(MAX_START, Cell::Max);
        board.set(MIN_START, Cell::Min);

        Self {
            board,
            max_pawn: MAX_START,
            min_pawn: MIN_START,
            to_move: Side::Min,
            turn: 0,
        }
    }

    /// Build a position from text rows (`.` empty, `X` MAX, `O` MIN, `#` blocked).
    ///
    /// The turn counter is set to the number of barriers on the board.
    pub fn from_rows(rows: &[&str], to_move: Side) -> Result<GameState, ParseError> {
        if rows.len() != BOARD_SIZE {
            return Err(ParseError::RowCount { expected: BOARD_SIZE, got: rows.len() });
        }

        let mut board = Board::empty();
        let mut max_pawns = Vec::new();
        let mut min_pawns = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.trim().chars().collect();
            if chars.len() != BOARD_SIZE {
                return Err(ParseError::RowLength { row, expected: BOARD_SIZE, got: chars.len() });
            }

            for (col, &c) in chars.iter().enumerate() {
                let cell = Cell::from_char(c)
                    .ok_or(ParseError::InvalidCharacter { character: c, row, col })?;
                let at = Coord { row: row as u8, col: col as u8 };
                match cell {
                    Cell::Max => max_pawns.push(at),
                    Cell::Min => min_pawns.push(at),
                    _ => {}
                }
                board.set(at, cell);
            }
        }

        if max_pawns.len() != 1 {
            return Err(ParseError::PawnCount { side: Side::Max.name(), found: max_pawns.len() });
        }
        if min_pawns.len() != 1 {
            return Err(ParseError::PawnCount { side: Side::Min.name(), found: min_pawns.len() });
        }

        Ok(Self {
            board,
            max_pawn: max_pawns[0],
            min_pawn: min_pawns[0],
            to_move,
            turn: board.blocked_count() as u32,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn pawn(&self, side: Side) -> Coord {
        match side {
            Side::Max => self.max_pawn,
            Side::Min => self.min_pawn,
        }
    }

    /// Same position with a different side to move
    pub fn with_to_move(mut self, side: Side) -> GameState {
        self.to_move = side;
        self
    }

    /// Same position with a different turn counter
    pub fn with_turn(mut self, turn: u32) -> GameState {
        self.turn = turn;
        self
    }

    /// Legal one-cell steps for the side to move
    pub fn legal_steps(&self) -> StepList {
        self.steps_for(self.to_move)
    }

    /// Legal one-cell steps for `side`, regardless of whose turn it is
    pub fn steps_for(&self, side: Side) -> StepList {
        self.pawn(side)
            .neighbors()
            .filter(|&to| self.board.get(to).is_empty())
            .collect()
    }

    /// Terminal test: the side to move cannot step
    pub fn has_no_moves(&self) -> bool {
        self.legal_steps().is_empty()
    }

    /// Winner of a finished game (the side that is not stuck)
    pub fn winner(&self) -> Option<Side> {
        if self.has_no_moves() {
            Some(self.to_move.opponent())
        } else {
            None
        }
    }

    /// Every (step, barrier) pair for the side to move.
    ///
    /// Steps follow `legal_steps` order; barriers are the Empty cells of the
    /// board *after* the step, in row-major order.
    pub fn generate_moves(&self) -> Vec<Move> {
        let steps = self.legal_steps();
        let mut moves = Vec::with_capacity(steps.len() * self.board.count(Cell::Empty));

        for step in steps {
            let mut after = *self;
            after.apply_step(step);
            moves.extend(after.board.empty_cells().map(|barrier| Move::new(step, barrier)));
        }

        moves
    }

    /// Relocate the active pawn. Does not validate the step and does not
    /// change the side to move.
    pub fn apply_step(&mut self, to: Coord) {
        let side = self.to_move;
        let from = self.pawn(side);

        self.board.set(from, Cell::Empty);
        self.board.set(to, side.pawn());

        match side {
            Side::Max => self.max_pawn = to,
            Side::Min => self.min_pawn = to,
        }
    }

    /// Block `at` if it is on the board and Empty. Returns false, leaving the
    /// state untouched, otherwise.
    pub fn place_barrier(&mut self, at: Coord) -> bool {
        if !at.is_valid() || !self.board.get(at).is_empty() {
            return false;
        }
        self.board.set(at, Cell::Blocked);
        true
    }

    /// Apply a full turn and hand the move to the opponent.
    ///
    /// The move is trusted: it must come from `generate_moves` or have been
    /// checked with `is_legal_move`. Use `try_apply_move` for untrusted input.
    pub fn apply_move(&self, mv: Move) -> GameState {
        let mut next = *self;
        next.apply_step(mv.step);
        let placed = next.place_barrier(mv.barrier);
        debug_assert!(placed, "barrier {} is not an empty cell", mv.barrier);
        next.to_move = self.to_move.opponent();
        next.turn = self.turn + 1;
        next
    }

    /// Validating version of `apply_move`. On error `self` is unchanged.
    pub fn try_apply_move(&self, mv: Move) -> Result<GameState, MoveError> {
        self.validate_move(mv)?;
        Ok(self.apply_move(mv))
    }

    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.validate_move(mv).is_ok()
    }

    /// Number of move sequences of length `depth` (leaf count of the full game tree)
    pub fn perft(&self, depth: u8) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .into_iter()
            .map(|mv| self.apply_move(mv).perft(depth - 1))
            .sum()
    }

    fn validate_move(&self, mv: Move) -> Result<(), MoveError> {
        if self.has_no_moves() {
            return Err(MoveError::game_over(self.to_move));
        }

        let from = self.pawn(self.to_move);
        let to = mv.step;

        if !to.is_valid() {
            return Err(MoveError::StepOutOfBounds { to });
        }
        if from.chebyshev(to) != 1 {
            return Err(MoveError::StepNotAdjacent { from, to });
        }
        match self.board.get(to) {
            Cell::Blocked => return Err(MoveError::StepBlocked { to }),
            Cell::Max | Cell::Min => return Err(MoveError::StepOccupied { to }),
            Cell::Empty => {}
        }

        let at = mv.barrier;
        if !at.is_valid() {
            return Err(MoveError::BarrierOutOfBounds { at });
        }

        let mut after = *self;
        after.apply_step(to);
        if !after.board.get(at).is_empty() {
            return Err(MoveError::BarrierNotEmpty { at });
        }

        Ok(())
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        writeln!(f, "turn {} - {} to move", self.turn, self.to_move.name())
    }
}
