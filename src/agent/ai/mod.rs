// AI Agent - Minimax with Alpha-Beta Pruning
//
// This module implements the automated player: a depth-limited minimax
// search with alpha-beta pruning over full turns (step + barrier).
//
// Key features:
// - Deterministic (same position and depth always give the same move)
// - Phase-blended evaluation over named, configurable sub-heuristics
// - Optional search-tree trace recording, owned per session

mod distance;
mod evaluation;
mod minimax;
mod minimax_player;
mod search;
mod trace;

#[cfg(test)]
mod tests;

pub use distance::{distance_map, local_space, reachable_area, DistanceMap, UNREACHABLE};
pub use evaluation::{
    barrier_pressure, default_evaluator, evaluate, is_terminal_score, local_space_difference,
    mobility, positional, reachable_area_difference, territory, EvalConfigError, Evaluator,
    Heuristic, Phase, PhaseBlend, TermScore, WeightedTerm, HEURISTIC_SCALE, LATE_PHASE_TURN,
    LOSE_SCORE, TERMINAL_THRESHOLD, WIN_SCORE,
};
pub use minimax::{minimax, minimax_with, Searcher, SCORE_INFINITY};
pub use minimax_player::MinimaxPlayer;
pub use search::{find_best_move, search, SearchResult, SearchSession};
pub use trace::{
    Annotation, NoTrace, NodeId, NodeRole, SearchNode, SearchObserver, TraceRecorder, TurnRecord,
};
