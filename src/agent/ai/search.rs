// Best-move search orchestrator
//
// Wraps the root alpha-beta search with timing, node statistics and optional
// trace recording. A `SearchSession` owns the trace log so independent games
// never share recorder state.

use crate::game_repr::{GameState, Move};
use super::evaluation::{default_evaluator, Evaluator};
use super::minimax::Searcher;
use super::trace::{NoTrace, SearchNode, SearchObserver, TraceRecorder, TurnRecord};
use log::{debug, trace};
use std::time::Instant;

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Minimax value of `best_move` from MAX's perspective
    pub score: i32,
    pub depth: u8,
    pub nodes_searched: u64,
    pub time_ms: u64,
}

/// Search `state` to `depth_limit` plies with the given evaluator and no tracing.
///
/// A depth limit of 0 is treated as 1.
pub fn search(state: &GameState, depth_limit: u8, evaluator: &Evaluator) -> SearchResult {
    run_search(state, depth_limit, evaluator, &mut NoTrace)
}

/// Best move for the side to move using the default evaluator.
///
/// Returns `None` only when the side to move has no legal step.
pub fn find_best_move(state: &GameState, depth_limit: u8) -> Option<Move> {
    search(state, depth_limit, default_evaluator()).best_move
}

fn run_search<O: SearchObserver>(
    state: &GameState,
    depth_limit: u8,
    evaluator: &Evaluator,
    observer: &mut O,
) -> SearchResult {
    let start_time = Instant::now();
    let depth = depth_limit.max(1);

    let mut searcher = Searcher::new(evaluator, observer, depth);
    let (best_move, score) = searcher.search_root(state);

    let result = SearchResult {
        best_move,
        score,
        depth,
        nodes_searched: searcher.nodes_searched(),
        time_ms: start_time.elapsed().as_millis() as u64,
    };
    print_search_info(state, &result);
    result
}

fn print_search_info(state: &GameState, result: &SearchResult) {
    let nps = if result.time_ms > 0 {
        result.nodes_searched * 1000 / result.time_ms
    } else {
        result.nodes_searched
    };

    match result.best_move {
        Some(mv) => debug!(
            "turn {} {}: depth {} score {} nodes {} time {}ms nps {} best {}",
            state.turn(),
            state.to_move().name(),
            result.depth,
            result.score,
            result.nodes_searched,
            result.time_ms,
            nps,
            mv
        ),
        None => debug!(
            "turn {} {}: no legal move, score {}",
            state.turn(),
            state.to_move().name(),
            result.score
        ),
    }
}

/// Search state that outlives a single query: the evaluator and, when
/// tracing is enabled, the recorder plus the ordered log of traced turns.
#[derive(Debug, Clone)]
pub struct SearchSession {
    evaluator: Evaluator,
    tracing: bool,
    recorder: TraceRecorder,
    log: Vec<TurnRecord>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(Evaluator::default())
    }
}

impl SearchSession {
    pub fn new(evaluator: Evaluator) -> Self {
        Self {
            evaluator,
            tracing: false,
            recorder: TraceRecorder::new(),
            log: Vec::new(),
        }
    }

    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.tracing = enabled;
        self
    }

    pub fn set_tracing(&mut self, enabled: bool) {
        self.tracing = enabled;
    }

    pub fn is_tracing(&self) -> bool {
        self.tracing
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Search `state` and, if tracing, append the search tree to the log.
    pub fn find_best_move(&mut self, state: &GameState, depth_limit: u8) -> SearchResult {
        if !self.tracing {
            return run_search(state, depth_limit, &self.evaluator, &mut NoTrace);
        }

        self.recorder.clear();
        let result = run_search(state, depth_limit, &self.evaluator, &mut self.recorder);

        let record = TurnRecord {
            turn: state.turn() + 1,
            side: state.to_move(),
            board: *state.board(),
            nodes: self.recorder.take_nodes(),
            best_score: result.score,
        };
        trace!("recorded turn {} with {} nodes", record.turn, record.nodes.len());
        self.log.push(record);

        result
    }

    /// Nodes of the most recent traced search
    pub fn last_trace(&self) -> &[SearchNode] {
        self.log.last().map(|r| r.nodes.as_slice()).unwrap_or(&[])
    }

    /// Read-only view of every traced turn, oldest first
    pub fn trace_log(&self) -> &[TurnRecord] {
        &self.log
    }

    /// Drain the trace log
    pub fn take_trace_log(&mut self) -> Vec<TurnRecord> {
        std::mem::take(&mut self.log)
    }
}
