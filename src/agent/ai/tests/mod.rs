use crate::game_repr::{GameState, Side, BOARD_SIZE};

// ==================== HELPER FUNCTIONS ====================

/// Helper function to build a position from text rows
pub fn position(rows: [&str; BOARD_SIZE], to_move: Side) -> GameState {
    GameState::from_rows(&rows, to_move).expect("test fixture should parse")
}

/// Nearly full board: MAX in the top-left pocket, MIN in the bottom-right
/// corner with a single exit at (5,6).
pub fn trap_position() -> GameState {
    position(
        [
            "X..####",
            "...####",
            "#######",
            "#######",
            "#######",
            "######.",
            "######O",
        ],
        Side::Max,
    )
}

/// Small late-game position with a handful of open cells on both sides
pub fn endgame_position(to_move: Side) -> GameState {
    position(
        [
            "X..####",
            "..#####",
            "#.#####",
            "#######",
            "####..#",
            "####..#",
            "####.O#",
        ],
        to_move,
    )
}

// ==================== TEST MODULES ====================
