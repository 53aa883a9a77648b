//! Game configuration types.
//!
//! A [`GameConfig`] holds everything needed to start a game: who plays each
//! side, how strong the automated players are and which evaluator they use.

use crate::agent::ai::Evaluator;
use crate::game_repr::Side;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Deepest search a configuration may request
pub const MAX_SEARCH_DEPTH: u8 = 8;

/// AI difficulty levels that map to search depth.
///
/// One ply is a full turn (step plus barrier), so the branching factor is
/// in the hundreds early on and depths stay small.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
pub enum Difficulty {
    /// One ply: greedy on the evaluation
    Easy,
    /// Two plies
    #[default]
    Medium,
    /// Three plies
    Hard,
    /// Four plies; slow in the opening
    Expert,
}

impl Difficulty {
    /// Search depth in plies
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
            Difficulty::Expert => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

/// Named evaluator configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
pub enum EvaluatorPreset {
    /// Three terms early, five from turn 5 on
    #[default]
    Phased,
    /// Mobility, barrier pressure and reachable area
    Classic,
    /// Five terms throughout
    Territorial,
}

impl EvaluatorPreset {
    pub fn evaluator(&self) -> Evaluator {
        match self {
            EvaluatorPreset::Phased => Evaluator::phased(),
            EvaluatorPreset::Classic => Evaluator::classic(),
            EvaluatorPreset::Territorial => Evaluator::territorial(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EvaluatorPreset::Phased => "phased",
            EvaluatorPreset::Classic => "classic",
            EvaluatorPreset::Territorial => "territorial",
        }
    }
}

/// Configuration for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerConfig {
    /// Uniformly random legal moves
    Random,
    /// Minimax search to a fixed depth
    AI { depth: u8 },
}

impl PlayerConfig {
    pub fn ai(difficulty: Difficulty) -> Self {
        PlayerConfig::AI {
            depth: difficulty.max_depth(),
        }
    }

    pub fn is_ai(&self) -> bool {
        matches!(self, PlayerConfig::AI { .. })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("search depth {depth} for {side} is out of range 1..={max}")]
    InvalidDepth { side: &'static str, depth: u8, max: u8 },

    #[error("a match needs at least one game")]
    NoGames,
}

/// Complete game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub max_player: PlayerConfig,
    pub min_player: PlayerConfig,
    /// Evaluator shared by every AI player in the game
    pub evaluator: EvaluatorPreset,
    /// Record search trees of AI players
    pub trace: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::ai_vs_random(Side::Max, Difficulty::default())
    }
}

impl GameConfig {
    /// AI on `ai_side`, random mover on the other side.
    pub fn ai_vs_random(ai_side: Side, difficulty: Difficulty) -> Self {
        let (max_player, min_player) = match ai_side {
            Side::Max => (PlayerConfig::ai(difficulty), PlayerConfig::Random),
            Side::Min => (PlayerConfig::Random, PlayerConfig::ai(difficulty)),
        };

        Self {
            max_player,
            min_player,
            evaluator: EvaluatorPreset::default(),
            trace: false,
        }
    }

    /// Two AIs
    pub fn self_play(max_difficulty: Difficulty, min_difficulty: Difficulty) -> Self {
        Self {
            max_player: PlayerConfig::ai(max_difficulty),
            min_player: PlayerConfig::ai(min_difficulty),
            evaluator: EvaluatorPreset::default(),
            trace: false,
        }
    }

    pub fn with_evaluator(mut self, evaluator: EvaluatorPreset) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn player(&self, side: Side) -> PlayerConfig {
        match side {
            Side::Max => self.max_player,
            Side::Min => self.min_player,
        }
    }

    /// Check every AI depth is within 1..=MAX_SEARCH_DEPTH
    pub fn validate(&self) -> Result<(), ConfigError> {
        for side in [Side::Max, Side::Min] {
            if let PlayerConfig::AI { depth } = self.player(side) {
                if depth == 0 || depth > MAX_SEARCH_DEPTH {
                    return Err(ConfigError::InvalidDepth {
                        side: side.name(),
                        depth,
                        max: MAX_SEARCH_DEPTH,
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_vs_random_config() {
        let config = GameConfig::ai_vs_random(Side::Max, Difficulty::Hard);
        assert_eq!(config.max_player, PlayerConfig::AI { depth: 3 });
        assert_eq!(config.min_player, PlayerConfig::Random);
        assert_eq!(config.evaluator, EvaluatorPreset::Phased);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ai_vs_random_config_min() {
        let config = GameConfig::ai_vs_random(Side::Min, Difficulty::Easy);
        assert_eq!(config.player(Side::Max), PlayerConfig::Random);
        assert_eq!(config.player(Side::Min), PlayerConfig::AI { depth: 1 });
    }

    #[test]
    fn test_self_play_config() {
        let config = GameConfig::self_play(Difficulty::Medium, Difficulty::Expert)
            .with_evaluator(EvaluatorPreset::Classic)
            .with_trace(true);
        assert!(config.max_player.is_ai() && config.min_player.is_ai());
        assert_eq!(config.min_player, PlayerConfig::AI { depth: 4 });
        assert_eq!(config.evaluator.evaluator(), Evaluator::classic());
        assert!(config.trace);
    }

    #[test]
    fn test_depth_out_of_range() {
        let mut config = GameConfig::default();
        config.min_player = PlayerConfig::AI { depth: 0 };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidDepth { side: "MIN", depth: 0, max: MAX_SEARCH_DEPTH })
        );

        config.min_player = PlayerConfig::AI { depth: MAX_SEARCH_DEPTH + 1 };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_difficulty_depths_increase() {
        let depths: Vec<u8> = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard, Difficulty::Expert]
            .iter()
            .map(Difficulty::max_depth)
            .collect();
        assert_eq!(depths, vec![1, 2, 3, 4]);
    }
}
