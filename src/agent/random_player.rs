//! Player that picks uniformly among all legal moves.

use crate::agent::player::Player;
use crate::game_repr::{GameState, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub struct RandomPlayer {
    rng: StdRng,
    name: String,
}

impl RandomPlayer {
    /// Reproducible player: the same seed replays the same choices
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            name: "Random".to_string(),
        }
    }

    /// Player seeded from system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            name: "Random".to_string(),
        }
    }
}

impl Player for RandomPlayer {
    fn get_move(&mut self, state: &GameState) -> Option<Move> {
        state.generate_moves().choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_move_is_legal() {
        let mut player = RandomPlayer::new(3);
        let state = GameState::new();
        for _ in 0..10 {
            let mv = player.get_move(&state).unwrap();
            assert!(state.is_legal_move(mv));
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let state = GameState::new();
        let mut a = RandomPlayer::new(42);
        let mut b = RandomPlayer::new(42);
        for _ in 0..5 {
            assert_eq!(a.get_move(&state), b.get_move(&state));
        }
    }
}
