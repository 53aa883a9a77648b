//! Player trait and associated types for game agents.
//!
//! Anything that can choose a move implements [`Player`]: the minimax AI, the
//! random mover, or a scripted replay. The match runner owns the
//! authoritative [`GameState`] and asks each player for a move in turn.
//!
//! The trait describes behaviour only. Each implementation provides its own
//! constructor, since an AI needs a depth and evaluator while a random mover
//! needs a seed.

use crate::agent::ai::TurnRecord;
use crate::game_repr::{GameState, Move, Side};

/// Result of a completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// MIN was left without a legal step (or resigned)
    MaxWins,
    /// MAX was left without a legal step (or resigned)
    MinWins,
}

impl GameResult {
    /// Create a GameResult from the winning side
    pub fn from_winner(winner: Side) -> Self {
        match winner {
            Side::Max => GameResult::MaxWins,
            Side::Min => GameResult::MinWins,
        }
    }

    pub fn winner(&self) -> Side {
        match self {
            GameResult::MaxWins => Side::Max,
            GameResult::MinWins => Side::Min,
        }
    }
}

/// Trait for entities that can provide moves.
///
/// Only `get_move()` must be implemented. The notification hooks default to
/// doing nothing.
pub trait Player {
    /// Request the next move for the side to move in `state`.
    ///
    /// Returns `None` if the player resigns. The runner validates the move
    /// before applying it.
    fn get_move(&mut self, state: &GameState) -> Option<Move>;

    /// Notify this player that the opponent made a move.
    fn opponent_moved(&mut self, _mv: Move) {}

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {}

    /// Drain any search trees recorded while choosing moves
    fn take_trace_log(&mut self) -> Vec<TurnRecord> {
        Vec::new()
    }

    /// Display name used in logs
    fn name(&self) -> &str {
        "Player"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FirstMove;

    impl Player for FirstMove {
        fn get_move(&mut self, state: &GameState) -> Option<Move> {
            state.generate_moves().first().copied()
        }
    }

    #[test]
    fn test_default_hooks() {
        let mut player = FirstMove;
        assert_eq!(player.name(), "Player");
        assert!(player.take_trace_log().is_empty());
        assert!(player.get_move(&GameState::new()).is_some());
    }

    #[test]
    fn test_result_winner_round_trip() {
        for side in [Side::Max, Side::Min] {
            assert_eq!(GameResult::from_winner(side).winner(), side);
        }
    }
}
