//! Drives complete games between two players.
//!
//! The runner owns the authoritative [`GameState`]. On each turn it asks the
//! player for the side to move, validates the answer with
//! [`GameState::try_apply_move`] and hands the move to the opponent. A game
//! ends when the side to move has no legal step or resigns.

use crate::agent::ai::{MinimaxPlayer, TurnRecord};
use crate::agent::player::{GameResult, Player};
use crate::agent::random_player::RandomPlayer;
use crate::config::{ConfigError, GameConfig, PlayerConfig};
use crate::game_repr::{GameState, Move, MoveError, Side};
use log::{debug, info, warn};
use thiserror::Error;

/// How a game finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The loser had no legal step on its turn
    NoLegalStep,
    /// The loser returned no move while steps were available
    Resignation,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MatchError {
    #[error("{player} ({side}) played {mv}: {source}")]
    IllegalMove {
        player: String,
        side: &'static str,
        mv: Move,
        #[source]
        source: MoveError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Full record of one finished game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub result: GameResult,
    pub reason: EndReason,
    pub moves: Vec<Move>,
    pub final_state: GameState,
    /// Search trees recorded by either player, in turn order
    pub traces: Vec<TurnRecord>,
}

/// Aggregate of several games played with one configuration
#[derive(Debug, Clone, Default)]
pub struct MatchSummary {
    pub max_wins: u32,
    pub min_wins: u32,
    pub total_moves: usize,
    pub games: Vec<GameRecord>,
}

impl MatchSummary {
    pub fn games_played(&self) -> u32 {
        self.max_wins + self.min_wins
    }

    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::Max => self.max_wins,
            Side::Min => self.min_wins,
        }
    }

    fn record(&mut self, game: GameRecord) {
        match game.result {
            GameResult::MaxWins => self.max_wins += 1,
            GameResult::MinWins => self.min_wins += 1,
        }
        self.total_moves += game.moves.len();
        self.games.push(game);
    }
}

/// Build the player described by `config` for one side.
///
/// Random players are seeded from `seed` so whole matches are reproducible.
pub fn create_player(config: &GameConfig, side: Side, seed: u64) -> Box<dyn Player> {
    match config.player(side) {
        PlayerConfig::Random => Box::new(RandomPlayer::new(seed)),
        PlayerConfig::AI { depth } => {
            let name = format!("AI {} d{} ({})", side.name(), depth, config.evaluator.name());
            Box::new(
                MinimaxPlayer::new(config.evaluator.evaluator(), depth, name).with_tracing(config.trace),
            )
        }
    }
}

/// Play one game from `start` until the side to move is stuck or resigns.
pub fn play_game<'a>(
    max: &'a mut dyn Player,
    min: &'a mut dyn Player,
    start: GameState,
) -> Result<GameRecord, MatchError> {
    let mut state = start;
    let mut moves = Vec::new();

    let (result, reason) = loop {
        let side = state.to_move();
        if let Some(winner) = state.winner() {
            break (GameResult::from_winner(winner), EndReason::NoLegalStep);
        }

        let (player, opponent) = match side {
            Side::Max => (&mut *max, &mut *min),
            Side::Min => (&mut *min, &mut *max),
        };

        let Some(mv) = player.get_move(&state) else {
            warn!("{} ({}) resigned on turn {}", player.name(), side.name(), state.turn());
            break (GameResult::from_winner(side.opponent()), EndReason::Resignation);
        };

        state = state.try_apply_move(mv).map_err(|source| MatchError::IllegalMove {
            player: player.name().to_string(),
            side: side.name(),
            mv,
            source,
        })?;
        debug!("turn {}: {} played {}", state.turn(), side.name(), mv);

        opponent.opponent_moved(mv);
        moves.push(mv);
    };

    info!(
        "{} wins after {} moves ({:?})",
        result.winner().name(),
        moves.len(),
        reason
    );
    max.game_ended(result);
    min.game_ended(result);

    let mut traces = max.take_trace_log();
    traces.extend(min.take_trace_log());
    traces.sort_by_key(|record| record.turn);

    Ok(GameRecord {
        result,
        reason,
        moves,
        final_state: state,
        traces,
    })
}

/// Play `games` games from the standard start, building fresh players each game.
pub fn play_match(config: &GameConfig, games: u32, seed: u64) -> Result<MatchSummary, MatchError> {
    config.validate()?;
    if games == 0 {
        return Err(ConfigError::NoGames.into());
    }

    let mut summary = MatchSummary::default();
    for game in 0..games {
        let game_seed = seed.wrapping_add(2 * game as u64);
        let mut max = create_player(config, Side::Max, game_seed);
        let mut min = create_player(config, Side::Min, game_seed.wrapping_add(1));

        info!("game {}/{}: {} vs {}", game + 1, games, max.name(), min.name());
        let record = play_game(max.as_mut(), min.as_mut(), GameState::new())?;
        summary.record(record);
    }

    info!(
        "match over: MAX {} - MIN {} in {} moves",
        summary.max_wins, summary.min_wins, summary.total_moves
    );
    Ok(summary)
}
