use crate::game_repr::{Cell, Coord, GameState, Move, Side};
use super::{block_all, position};

// ==================== MOVE GENERATION TESTS ====================

#[test]
fn test_initial_branching_factor() {
    let state = GameState::new();
    let moves = state.generate_moves();

    // 5 steps, 47 empty cells each
    assert_eq!(moves.len(), 5 * 47);
}

#[test]
fn test_move_count_is_steps_times_empty_cells() {
    let mut state = position(
        [
            ".......",
            "..#....",
            "...X...",
            "....#..",
            ".#.....",
            "....O..",
            "#......",
        ],
        Side::Max,
    );

    for side in [Side::Max, Side::Min] {
        state = state.with_to_move(side);
        let expected = state.legal_steps().len() * state.board().count(Cell::Empty);
        assert_eq!(state.generate_moves().len(), expected);
    }

    block_all(&mut state, &[(0, 0), (6, 6)]);
    let expected = state.legal_steps().len() * state.board().count(Cell::Empty);
    assert_eq!(state.generate_moves().len(), expected);
}

#[test]
fn test_vacated_cell_is_a_barrier_target() {
    let state = GameState::new();
    let vacated = state.pawn(Side::Min);

    let moves = state.generate_moves();
    let step = Coord::new(5, 3);
    assert!(moves.contains(&Move::new(step, vacated)));
    // The step destination itself is never a barrier target for that step
    assert!(!moves.contains(&Move::new(step, step)));
}

#[test]
fn test_generation_order_is_step_then_row_major() {
    let state = GameState::new();
    let moves = state.generate_moves();
    let first_step = state.legal_steps()[0];

    assert_eq!(moves[0], Move::new(first_step, Coord::new(0, 0)));
    assert_eq!(moves[1], Move::new(first_step, Coord::new(0, 1)));
    // (0,3) is MAX's pawn and is skipped
    assert_eq!(moves[3], Move::new(first_step, Coord::new(0, 4)));
    assert!(moves[..47].iter().all(|m| m.step == first_step));
}

#[test]
fn test_generated_moves_are_legal() {
    let state = GameState::new();
    for mv in state.generate_moves() {
        assert!(state.is_legal_move(mv), "{mv} should be legal");
    }
}

#[test]
fn test_no_moves_when_stuck() {
    let state = position(
        [
            "X#.....",
            "##.....",
            ".......",
            ".......",
            ".......",
            ".......",
            "...O...",
        ],
        Side::Max,
    );
    assert!(state.generate_moves().is_empty());
}

#[test]
fn test_perft_initial_depth_1() {
    assert_eq!(GameState::new().perft(1), 235);
}

#[test]
fn test_perft_initial_depth_2() {
    // MAX keeps 5 steps unless MIN's barrier landed next to it (5 of 47 targets)
    assert_eq!(GameState::new().perft(2), 52900);
}
