//! End-to-end games through the public API
//!
//! This test suite covers:
//! - Termination and winner detection of complete games
//! - Legality of every move the AI and random players make
//! - Strength of the minimax player against random play
//! - Trace export of a traced match

use blockade_engine::agent::ai::{MinimaxPlayer, NodeRole};
use blockade_engine::agent::{play_game, play_match, EndReason, Player, RandomPlayer};
use blockade_engine::config::{Difficulty, EvaluatorPreset, GameConfig};
use blockade_engine::game_repr::{GameState, Move, Side};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Replays `moves` from the start, checking every move and the barrier count
fn replay(moves: &[Move]) -> GameState {
    let mut state = GameState::new();
    for (index, &mv) in moves.iter().enumerate() {
        assert!(state.is_legal_move(mv), "move {} ({}) is illegal", index, mv);
        let next = state.try_apply_move(mv).unwrap();
        assert_eq!(next.board().blocked_count(), state.board().blocked_count() + 1);
        assert_eq!(next.to_move(), state.to_move().opponent());
        state = next;
    }
    state
}

#[test]
fn test_random_games_terminate_with_a_winner() {
    init_logger();

    for seed in 0..20 {
        let mut max = RandomPlayer::new(seed);
        let mut min = RandomPlayer::new(seed + 1000);
        let record = play_game(&mut max, &mut min, GameState::new()).unwrap();

        assert_eq!(record.reason, EndReason::NoLegalStep);
        assert!(record.moves.len() <= 47, "At most every free cell gets blocked");

        let end = replay(&record.moves);
        assert_eq!(end, record.final_state);
        assert!(end.has_no_moves());
        assert_eq!(end.winner(), Some(record.result.winner()));
    }
}

#[test]
fn test_ai_game_moves_are_legal() {
    init_logger();

    let mut max = MinimaxPlayer::with_difficulty(Difficulty::Medium);
    let mut min = RandomPlayer::new(11);
    let record = play_game(&mut max, &mut min, GameState::new()).unwrap();

    let end = replay(&record.moves);
    assert_eq!(end.winner(), Some(record.result.winner()));
}

#[test]
fn test_minimax_beats_random() {
    init_logger();

    let config = GameConfig::ai_vs_random(Side::Max, Difficulty::Medium);
    let summary = play_match(&config, 4, 2024).unwrap();

    assert_eq!(summary.games_played(), 4);
    assert!(
        summary.wins(Side::Max) >= 3,
        "depth-2 search won only {} of 4 games against random moves",
        summary.wins(Side::Max)
    );
}

#[test]
fn test_every_preset_plays_a_full_game() {
    init_logger();

    for preset in [EvaluatorPreset::Phased, EvaluatorPreset::Classic, EvaluatorPreset::Territorial] {
        let config = GameConfig::ai_vs_random(Side::Min, Difficulty::Easy).with_evaluator(preset);
        let summary = play_match(&config, 1, 5).unwrap();
        let game = &summary.games[0];
        replay(&game.moves);
    }
}

#[test]
fn test_traced_match_exports_json() {
    init_logger();

    let config = GameConfig::self_play(Difficulty::Easy, Difficulty::Easy).with_trace(true);
    let summary = play_match(&config, 1, 0).unwrap();
    let game = &summary.games[0];

    assert_eq!(game.traces.len(), game.moves.len());
    for record in &game.traces {
        assert_eq!(record.nodes[0].role, NodeRole::Root);
        assert_eq!(record.nodes[0].value, record.best_score);
    }

    let turns: Vec<u32> = game.traces.iter().map(|r| r.turn).collect();
    let expected: Vec<u32> = (1..=game.moves.len() as u32).collect();
    assert_eq!(turns, expected, "Both players' searches merge into one sequence");

    for pair in game.traces.windows(2) {
        assert_ne!(pair[0].side, pair[1].side, "Sides alternate");
        assert_eq!(
            pair[1].board.blocked_count(),
            pair[0].board.blocked_count() + 1,
            "Board snapshots follow the game"
        );
    }
    assert_eq!(game.traces[0].side, Side::Min);

    let json = serde_json::to_string(&game.traces).unwrap();
    assert!(json.starts_with('['));
    assert!(json.contains("\"best_score\""));
}

#[test]
fn test_ai_player_is_deterministic() {
    let state = GameState::new();
    let mut a = MinimaxPlayer::with_difficulty(Difficulty::Easy);
    let mut b = MinimaxPlayer::with_difficulty(Difficulty::Easy);
    assert_eq!(a.get_move(&state), b.get_move(&state));
}
