pub mod player;
pub use player::*;

pub mod random_player;
pub use random_player::RandomPlayer;

pub mod match_runner;
pub use match_runner::{create_player, play_game, play_match, EndReason, GameRecord, MatchError, MatchSummary};

pub mod ai;
pub use ai::{find_best_move, MinimaxPlayer, SearchResult, SearchSession};
