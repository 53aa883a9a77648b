use crate::game_repr::{Coord, GameState, Side};
use super::{block_all, position};

// ==================== TERMINAL STATE TESTS ====================

#[test]
fn test_initial_state_is_not_terminal() {
    let state = GameState::new();
    assert!(!state.has_no_moves());
    assert_eq!(state.winner(), None);
}

#[test]
fn test_fully_surrounded_pawn_is_stuck() {
    let mut state = position(
        [
            ".......",
            ".......",
            ".......",
            "...X...",
            ".......",
            ".......",
            "...O...",
        ],
        Side::Max,
    );
    block_all(&mut state, &[(2, 2), (2, 3), (2, 4), (3, 2), (3, 4), (4, 2), (4, 3), (4, 4)]);

    assert!(state.has_no_moves());
    assert_eq!(state.winner(), Some(Side::Min));

    // The other side still has room
    assert!(!state.with_to_move(Side::Min).has_no_moves());
}

#[test]
fn test_opponent_pawn_counts_as_wall() {
    let state = position(
        [
            "XO.....",
            "##.....",
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
        ],
        Side::Max,
    );

    assert!(state.has_no_moves());
    assert_eq!(state.winner(), Some(Side::Min));
}

#[test]
fn test_stuck_min_means_max_wins() {
    let state = position(
        [
            "...X...",
            ".......",
            ".......",
            ".......",
            ".......",
            "#####..",
            "..#O#..",
        ],
        Side::Min,
    );

    assert!(state.has_no_moves());
    assert_eq!(state.winner(), Some(Side::Max));
    assert_eq!(state.pawn(Side::Min), Coord::new(6, 3));
}
