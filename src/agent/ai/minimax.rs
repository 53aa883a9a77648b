// Minimax Search with Alpha-Beta Pruning
//
// MAX and MIN are handled by two explicit branches rather than negamax: the
// evaluator always scores from MAX's point of view, and the trace needs to
// know which bound caused a cutoff.
//
// One ply is one full turn (step + barrier). Children are visited in
// generation order with no reordering, so the chosen move is fully
// determined by the position and depth.

use crate::game_repr::{GameState, Move, Side};
use super::evaluation::{default_evaluator, Evaluator};
use super::trace::{Annotation, NoTrace, NodeId, NodeRole, SearchObserver};

/// Bound used for "no limit"; larger than any score the evaluator returns
pub const SCORE_INFINITY: i32 = 2_000_000_000;

/// Depth-first alpha-beta searcher.
///
/// Holds the evaluator, an observer for trace recording and a node counter.
pub struct Searcher<'a, O: SearchObserver> {
    evaluator: &'a Evaluator,
    observer: &'a mut O,
    /// Depth the root was searched with, used to report relative node depth
    depth_limit: u8,
    nodes: u64,
}

impl<'a, O: SearchObserver> Searcher<'a, O> {
    pub fn new(evaluator: &'a Evaluator, observer: &'a mut O, depth_limit: u8) -> Self {
        Self {
            evaluator,
            observer,
            depth_limit,
            nodes: 0,
        }
    }

    /// Nodes visited so far, the root included
    pub fn nodes_searched(&self) -> u64 {
        self.nodes
    }

    /// Pick the best move for the side to move in `state`.
    ///
    /// MAX keeps the first child with a strictly greater value and raises
    /// alpha after each child; MIN mirrors this with beta. Returns `None` as
    /// the move only when `state` is already decided.
    pub fn search_root(&mut self, state: &GameState) -> (Option<Move>, i32) {
        self.nodes += 1;
        let root = self.observer.open_node(None, 0, NodeRole::Root);

        let moves = state.generate_moves();
        if moves.is_empty() {
            let value = self.evaluator.evaluate(state, self.depth_limit);
            self.observer.close_node(root, value, Some(Annotation::Leaf));
            return (None, value);
        }

        let child_depth = self.depth_limit.saturating_sub(1);
        let mut alpha = -SCORE_INFINITY;
        let mut beta = SCORE_INFINITY;
        let mut best_move = None;

        let best_value = match state.to_move() {
            Side::Max => {
                let mut best = -SCORE_INFINITY;
                for mv in moves {
                    let child = state.apply_move(mv);
                    let value = self.minimax(&child, child_depth, alpha, beta, Some(root));
                    if value > best {
                        best = value;
                        best_move = Some(mv);
                    }
                    alpha = alpha.max(value);
                }
                best
            }
            Side::Min => {
                let mut best = SCORE_INFINITY;
                for mv in moves {
                    let child = state.apply_move(mv);
                    let value = self.minimax(&child, child_depth, alpha, beta, Some(root));
                    if value < best {
                        best = value;
                        best_move = Some(mv);
                    }
                    beta = beta.min(value);
                }
                best
            }
        };

        self.observer.close_node(root, best_value, None);
        (best_move, best_value)
    }

    /// Minimax value of `state` searched `depth` plies deep within (alpha, beta).
    pub fn minimax(
        &mut self,
        state: &GameState,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        parent: Option<NodeId>,
    ) -> i32 {
        self.nodes += 1;
        let relative_depth = self.depth_limit.saturating_sub(depth);
        let id = self.observer.open_node(parent, relative_depth, state.to_move().into());

        // Base case: depth exhausted or the side to move is stuck
        if depth == 0 || state.has_no_moves() {
            let value = self.evaluator.evaluate(state, depth);
            self.observer.close_node(id, value, Some(Annotation::Leaf));
            return value;
        }

        let moves = state.generate_moves();
        if moves.is_empty() {
            // Unreachable while the vacated cell is always a barrier target
            let value = self.evaluator.evaluate(state, depth);
            self.observer.close_node(id, value, None);
            return value;
        }

        let mut annotation = None;

        let best = match state.to_move() {
            Side::Max => {
                let mut best = -SCORE_INFINITY;
                for mv in moves {
                    let child = state.apply_move(mv);
                    let value = self.minimax(&child, depth - 1, alpha, beta, Some(id));
                    best = best.max(value);
                    alpha = alpha.max(value);
                    if beta <= alpha {
                        annotation = Some(Annotation::PrunedBeta);
                        break;
                    }
                }
                best
            }
            Side::Min => {
                let mut best = SCORE_INFINITY;
                for mv in moves {
                    let child = state.apply_move(mv);
                    let value = self.minimax(&child, depth - 1, alpha, beta, Some(id));
                    best = best.min(value);
                    beta = beta.min(value);
                    if beta <= alpha {
                        annotation = Some(Annotation::PrunedAlpha);
                        break;
                    }
                }
                best
            }
        };

        self.observer.close_node(id, best, annotation);
        best
    }
}

/// Minimax value of `state` with the default evaluator and no tracing
pub fn minimax(state: &GameState, depth: u8, alpha: i32, beta: i32) -> i32 {
    minimax_with(state, depth, alpha, beta, default_evaluator()).0
}

/// Minimax value and visited-node count with a given evaluator
pub fn minimax_with(
    state: &GameState,
    depth: u8,
    alpha: i32,
    beta: i32,
    evaluator: &Evaluator,
) -> (i32, u64) {
    let mut observer = NoTrace;
    let mut searcher = Searcher::new(evaluator, &mut observer, depth);
    let value = searcher.minimax(state, depth, alpha, beta, None);
    (value, searcher.nodes_searched())
}
