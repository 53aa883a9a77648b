//! MinimaxPlayer - automated player using minimax with alpha-beta pruning
//!
//! The player owns a [`SearchSession`], so its evaluator and any recorded
//! search trees stay private to the game it plays. Every call to `get_move`
//! runs one fixed-depth search.
//!
//! # Examples
//!
//! ```
//! use blockade_engine::agent::ai::MinimaxPlayer;
//! use blockade_engine::agent::Player;
//! use blockade_engine::config::Difficulty;
//! use blockade_engine::game_repr::GameState;
//!
//! let mut ai = MinimaxPlayer::with_difficulty(Difficulty::Easy);
//! let mv = ai.get_move(&GameState::new());
//! assert!(mv.is_some());
//! ```

use crate::agent::player::{GameResult, Player};
use crate::config::Difficulty;
use crate::game_repr::{GameState, Move};
use super::evaluation::Evaluator;
use super::search::{SearchResult, SearchSession};
use super::trace::TurnRecord;
use log::{info, log_enabled, trace, Level};

pub struct MinimaxPlayer {
    session: SearchSession,
    /// Search depth in plies
    depth: u8,
    name: String,
    last_result: Option<SearchResult>,
}

impl MinimaxPlayer {
    pub fn new(evaluator: Evaluator, depth: u8, name: String) -> Self {
        Self {
            session: SearchSession::new(evaluator),
            depth: depth.max(1),
            name,
            last_result: None,
        }
    }

    /// Default evaluator; the name is generated as "AI ({difficulty})"
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        let name = format!("AI ({})", difficulty.name());
        Self::new(Evaluator::default(), difficulty.max_depth(), name)
    }

    /// Enable or disable search-tree recording
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.session.set_tracing(enabled);
        self
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth.max(1);
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    /// Statistics of the most recent search
    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }

    fn log_breakdown(&self, state: &GameState) {
        let evaluator = self.session.evaluator();
        let phase = evaluator.phase(state);
        for term in evaluator.breakdown(state) {
            trace!(
                "{} [{}] {}: raw {} normalized {:.3} weighted {:.1}",
                self.name,
                phase.name(),
                term.heuristic,
                term.raw,
                term.normalized,
                term.weighted
            );
        }
    }
}

impl Player for MinimaxPlayer {
    fn get_move(&mut self, state: &GameState) -> Option<Move> {
        let result = self.session.find_best_move(state, self.depth);

        if log_enabled!(Level::Trace) {
            if let Some(mv) = result.best_move {
                self.log_breakdown(&state.apply_move(mv));
            }
        }

        let best_move = result.best_move;
        self.last_result = Some(result);
        best_move
    }

    fn game_ended(&mut self, result: GameResult) {
        let won = result.winner().name();
        info!("{}: game over, {} wins", self.name, won);
    }

    fn take_trace_log(&mut self) -> Vec<TurnRecord> {
        self.session.take_trace_log()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
