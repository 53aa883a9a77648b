// Position evaluation function
// Returns an integer score from MAX's point of view (positive = good for MAX)
//
// A finished game scores WIN_SCORE / LOSE_SCORE shifted by the remaining
// search depth. Anything else is a phase-blended sum of normalized
// sub-heuristics, each defined as MAX's quantity minus MIN's.

use crate::game_repr::{Coord, GameState, Side};
use super::distance::{distance_map, local_space, reachable_area, UNREACHABLE};
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// Score of a proven MAX win (before the depth offset)
pub const WIN_SCORE: i32 = 1_000_000_000;

/// Score of a proven MAX loss (before the depth offset)
pub const LOSE_SCORE: i32 = -WIN_SCORE;

/// Smallest magnitude a depth-adjusted terminal score can have
pub const TERMINAL_THRESHOLD: i32 = WIN_SCORE - u8::MAX as i32;

/// Multiplier applied to the blended heuristic
pub const HEURISTIC_SCALE: f64 = 1000.0;

/// Turn from which the late-game blend applies (the turn counter
/// approximates the number of barriers placed)
pub const LATE_PHASE_TURN: u32 = 5;

/// Radius of the local-space flood fill
const LOCAL_SPACE_RADIUS: u8 = 2;

// Positional term weights
const CENTER_WEIGHT: i32 = 3;
const EDGE_WEIGHT: i32 = 4;

/// Default evaluator shared by the convenience entry points
static DEFAULT_EVALUATOR: LazyLock<Evaluator> = LazyLock::new(Evaluator::phased);

/// True if `score` is a proven win or loss rather than a heuristic guess
pub fn is_terminal_score(score: i32) -> bool {
    score.abs() >= TERMINAL_THRESHOLD
}

/// Evaluate with the default (phased) evaluator
pub fn evaluate(state: &GameState, depth: u8) -> i32 {
    DEFAULT_EVALUATOR.evaluate(state, depth)
}

/// Shared reference to the default evaluator
pub fn default_evaluator() -> &'static Evaluator {
    &DEFAULT_EVALUATOR
}

// ==================== SUB-HEURISTICS ====================

/// Legal steps available to MAX minus those available to MIN.
/// Both are counted as if it were that side's turn.
pub fn mobility(state: &GameState) -> i32 {
    state.steps_for(Side::Max).len() as i32 - state.steps_for(Side::Min).len() as i32
}

/// Barriers around MIN minus barriers around MAX
pub fn barrier_pressure(state: &GameState) -> i32 {
    let board = state.board();
    let around_max = board.blocked_around(state.pawn(Side::Max)) as i32;
    let around_min = board.blocked_around(state.pawn(Side::Min)) as i32;
    around_min - around_max
}

/// Voronoi territory: +1 for every open cell MAX reaches strictly first,
/// -1 for every cell MIN reaches strictly first.
pub fn territory(state: &GameState) -> i32 {
    let board = state.board();
    let max_dist = distance_map(board, state.pawn(Side::Max));
    let min_dist = distance_map(board, state.pawn(Side::Min));

    let mut score = 0;
    for c in Coord::all() {
        if board.get(c).is_blocked() {
            continue;
        }
        let (r, col) = (c.row as usize, c.col as usize);
        let (dm, dn) = (max_dist[r][col], min_dist[r][col]);
        if dm == UNREACHABLE && dn == UNREACHABLE {
            continue;
        }
        if dm < dn {
            score += 1;
        } else if dn < dm {
            score -= 1;
        }
    }
    score
}

/// Centre proximity (Manhattan) plus an outer-ring penalty
pub fn positional(state: &GameState) -> i32 {
    let center = Coord::center();
    let max = state.pawn(Side::Max);
    let min = state.pawn(Side::Min);

    let center_score = CENTER_WEIGHT * (min.manhattan(center) as i32 - max.manhattan(center) as i32);
    let edge_score = EDGE_WEIGHT * (min.is_on_edge() as i32 - max.is_on_edge() as i32);

    center_score + edge_score
}

/// Cells within two steps of MAX minus cells within two steps of MIN
pub fn local_space_difference(state: &GameState) -> i32 {
    let board = state.board();
    let max = local_space(board, state.pawn(Side::Max), LOCAL_SPACE_RADIUS) as i32;
    let min = local_space(board, state.pawn(Side::Min), LOCAL_SPACE_RADIUS) as i32;
    max - min
}

/// Size of MAX's reachable region minus MIN's, with the opposing pawn as a wall
pub fn reachable_area_difference(state: &GameState) -> i32 {
    let board = state.board();
    let max = state.pawn(Side::Max);
    let min = state.pawn(Side::Min);
    reachable_area(board, max, min) as i32 - reachable_area(board, min, max) as i32
}

/// Named sub-heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    Mobility,
    BarrierPressure,
    Territory,
    Positional,
    LocalSpace,
    ReachableArea,
}

impl Heuristic {
    pub const ALL: [Heuristic; 6] = [
        Heuristic::Mobility,
        Heuristic::BarrierPressure,
        Heuristic::Territory,
        Heuristic::Positional,
        Heuristic::LocalSpace,
        Heuristic::ReachableArea,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Mobility => "mobility",
            Heuristic::BarrierPressure => "barrier-pressure",
            Heuristic::Territory => "territory",
            Heuristic::Positional => "positional",
            Heuristic::LocalSpace => "local-space",
            Heuristic::ReachableArea => "reachable-area",
        }
    }

    /// Normalization divisor (empirical maximum magnitude of the raw score)
    pub fn max_magnitude(&self) -> f64 {
        match self {
            Heuristic::Mobility => 8.0,
            Heuristic::BarrierPressure => 8.0,
            Heuristic::Territory => 49.0,
            Heuristic::Positional => 22.0,
            Heuristic::LocalSpace => 24.0,
            Heuristic::ReachableArea => 47.0,
        }
    }

    pub fn raw(&self, state: &GameState) -> i32 {
        match self {
            Heuristic::Mobility => mobility(state),
            Heuristic::BarrierPressure => barrier_pressure(state),
            Heuristic::Territory => territory(state),
            Heuristic::Positional => positional(state),
            Heuristic::LocalSpace => local_space_difference(state),
            Heuristic::ReachableArea => reachable_area_difference(state),
        }
    }

    /// Raw score divided by `max_magnitude`, clamped to [-1, 1]
    pub fn normalized(&self, state: &GameState) -> f64 {
        self.normalize(self.raw(state))
    }

    /// Scale an already computed raw score into [-1, 1]
    pub fn normalize(&self, raw: i32) -> f64 {
        (raw as f64 / self.max_magnitude()).clamp(-1.0, 1.0)
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ==================== BLENDING ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Early,
    Late,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Early => "early",
            Phase::Late => "late",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedTerm {
    pub heuristic: Heuristic,
    pub weight: f64,
}

/// Ordered weight table for one phase
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseBlend {
    terms: Vec<WeightedTerm>,
}

impl PhaseBlend {
    pub fn new(terms: &[(Heuristic, f64)]) -> Self {
        Self {
            terms: terms
                .iter()
                .map(|&(heuristic, weight)| WeightedTerm { heuristic, weight })
                .collect(),
        }
    }

    pub fn terms(&self) -> &[WeightedTerm] {
        &self.terms
    }

    pub fn uses(&self, heuristic: Heuristic) -> bool {
        self.terms.iter().any(|t| t.heuristic == heuristic)
    }

    /// Largest possible |score| before scaling
    pub fn max_magnitude(&self) -> f64 {
        self.terms.iter().map(|t| t.weight.abs()).sum()
    }

    /// Weighted sum of normalized terms
    pub fn score(&self, state: &GameState) -> f64 {
        self.terms
            .iter()
            .map(|t| t.weight * t.heuristic.normalized(state))
            .sum()
    }
}

/// One term's contribution, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermScore {
    pub heuristic: Heuristic,
    pub raw: i32,
    pub normalized: f64,
    pub weighted: f64,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EvalConfigError {
    #[error("{phase} blend has no terms")]
    EmptyBlend { phase: &'static str },

    #[error("weight {weight} for {heuristic} must be finite")]
    InvalidWeight { heuristic: &'static str, weight: f64 },

    #[error("scale {scale} must be positive and finite")]
    InvalidScale { scale: f64 },

    #[error("{phase} blend can reach {max}, which collides with terminal scores (>= {limit})")]
    ScoreOverflow { phase: &'static str, max: f64, limit: i32 },
}

/// Phase-gated evaluator over a configurable set of sub-heuristics.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluator {
    early: PhaseBlend,
    late: PhaseBlend,
    late_phase_turn: u32,
    scale: f64,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::phased()
    }
}

impl Evaluator {
    /// Build an evaluator, rejecting tables whose heuristic range could reach
    /// the terminal score band.
    pub fn new(
        early: PhaseBlend,
        late: PhaseBlend,
        late_phase_turn: u32,
        scale: f64,
    ) -> Result<Self, EvalConfigError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(EvalConfigError::InvalidScale { scale });
        }

        for (phase, blend) in [(Phase::Early, &early), (Phase::Late, &late)] {
            if blend.terms.is_empty() {
                return Err(EvalConfigError::EmptyBlend { phase: phase.name() });
            }
            if let Some(bad) = blend.terms.iter().find(|t| !t.weight.is_finite()) {
                return Err(EvalConfigError::InvalidWeight {
                    heuristic: bad.heuristic.name(),
                    weight: bad.weight,
                });
            }
            let max = blend.max_magnitude() * scale;
            if max >= TERMINAL_THRESHOLD as f64 {
                return Err(EvalConfigError::ScoreOverflow {
                    phase: phase.name(),
                    max,
                    limit: TERMINAL_THRESHOLD,
                });
            }
        }

        Ok(Self { early, late, late_phase_turn, scale })
    }

    /// Default tables: three terms early, five once the board has filled up
    pub fn phased() -> Self {
        Self {
            early: PhaseBlend::new(&[
                (Heuristic::Mobility, 4.0),
                (Heuristic::BarrierPressure, 2.0),
                (Heuristic::Positional, 3.0),
            ]),
            late: Self::five_term_blend(),
            late_phase_turn: LATE_PHASE_TURN,
            scale: HEURISTIC_SCALE,
        }
    }

    /// Mobility, barrier pressure and reachable area in every phase
    pub fn classic() -> Self {
        let blend = PhaseBlend::new(&[
            (Heuristic::Mobility, 5.0),
            (Heuristic::BarrierPressure, 2.0),
            (Heuristic::ReachableArea, 10.0),
        ]);
        Self {
            early: blend.clone(),
            late: blend,
            late_phase_turn: 0,
            scale: HEURISTIC_SCALE,
        }
    }

    /// The five-term table from the first move on
    pub fn territorial() -> Self {
        Self {
            early: Self::five_term_blend(),
            late: Self::five_term_blend(),
            late_phase_turn: 0,
            scale: HEURISTIC_SCALE,
        }
    }

    fn five_term_blend() -> PhaseBlend {
        PhaseBlend::new(&[
            (Heuristic::Mobility, 5.0),
            (Heuristic::BarrierPressure, 2.0),
            (Heuristic::Territory, 7.0),
            (Heuristic::Positional, 3.0),
            (Heuristic::LocalSpace, 10.0),
        ])
    }

    pub fn phase(&self, state: &GameState) -> Phase {
        if state.turn() < self.late_phase_turn {
            Phase::Early
        } else {
            Phase::Late
        }
    }

    pub fn blend(&self, phase: Phase) -> &PhaseBlend {
        match phase {
            Phase::Early => &self.early,
            Phase::Late => &self.late,
        }
    }

    /// Largest heuristic (non-terminal) score this evaluator can return
    pub fn max_heuristic_score(&self) -> i32 {
        let max = self.early.max_magnitude().max(self.late.max_magnitude());
        (max * self.scale) as i32
    }

    /// Score `state` from MAX's perspective.
    ///
    /// `depth` is the remaining search depth; it only shifts terminal scores
    /// so that faster wins and slower losses are preferred.
    pub fn evaluate(&self, state: &GameState, depth: u8) -> i32 {
        if state.has_no_moves() {
            return match state.to_move() {
                Side::Max => LOSE_SCORE - depth as i32,
                Side::Min => WIN_SCORE + depth as i32,
            };
        }

        self.heuristic_score(state)
    }

    /// Blended heuristic only, without the terminal check
    pub fn heuristic_score(&self, state: &GameState) -> i32 {
        let blend = self.blend(self.phase(state));
        (blend.score(state) * self.scale) as i32
    }

    /// Per-term contributions of the active blend
    pub fn breakdown(&self, state: &GameState) -> Vec<TermScore> {
        self.blend(self.phase(state))
            .terms
            .iter()
            .map(|t| {
                let raw = t.heuristic.raw(state);
                let normalized = t.heuristic.normalize(raw);
                TermScore {
                    heuristic: t.heuristic,
                    raw,
                    normalized,
                    weighted: normalized * t.weight * self.scale,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position_is_balanced() {
        let state = GameState::new();
        // Mirror-symmetric start: every term cancels
        for h in Heuristic::ALL {
            assert_eq!(h.raw(&state), 0, "{h} should be 0 at the start");
        }
        assert_eq!(evaluate(&state, 0), 0);
    }

    #[test]
    fn test_presets_stay_below_terminal_band() {
        for evaluator in [Evaluator::phased(), Evaluator::classic(), Evaluator::territorial()] {
            assert!(evaluator.max_heuristic_score() < TERMINAL_THRESHOLD);
            let rebuilt = Evaluator::new(
                evaluator.early.clone(),
                evaluator.late.clone(),
                evaluator.late_phase_turn,
                evaluator.scale,
            );
            assert_eq!(rebuilt.as_ref(), Ok(&evaluator));
        }
    }

    #[test]
    fn test_phase_gate() {
        let evaluator = Evaluator::phased();
        let state = GameState::new();
        assert_eq!(evaluator.phase(&state), Phase::Early);
        assert_eq!(evaluator.phase(&state.with_turn(4)), Phase::Early);
        assert_eq!(evaluator.phase(&state.with_turn(5)), Phase::Late);

        assert!(!evaluator.blend(Phase::Early).uses(Heuristic::Territory));
        assert!(evaluator.blend(Phase::Late).uses(Heuristic::Territory));
        assert!(evaluator.blend(Phase::Late).uses(Heuristic::LocalSpace));
    }

    #[test]
    fn test_terminal_score_detection() {
        assert!(is_terminal_score(WIN_SCORE));
        assert!(is_terminal_score(LOSE_SCORE - 3));
        assert!(!is_terminal_score(27_000));
    }
}
