use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to build a position from text rows
pub fn position(rows: [&str; BOARD_SIZE], to_move: Side) -> GameState {
    GameState::from_rows(&rows, to_move).expect("test fixture should parse")
}

/// Helper function to check if a step exists in the step list
pub fn has_step(steps: &[Coord], row: u8, col: u8) -> bool {
    steps.contains(&Coord::new(row, col))
}

/// Helper function to block a list of cells, asserting each placement succeeds
pub fn block_all(state: &mut GameState, cells: &[(u8, u8)]) {
    for &(row, col) in cells {
        assert!(state.place_barrier(Coord::new(row, col)), "({row},{col}) should be blockable");
    }
}

// ==================== TEST MODULES ====================

mod move_generation;
mod terminal;
