use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use blockade_engine::agent::{play_match, MatchSummary};
use blockade_engine::config::{Difficulty, EvaluatorPreset, GameConfig, PlayerConfig};
use blockade_engine::game_repr::Side;
use clap::{Parser, ValueEnum};
use log::info;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum PlayerKind {
    Ai,
    Random,
}

#[derive(Parser, Debug)]
#[command(
    name = "blockade",
    version,
    about = "Play 7x7 blockade games between minimax and random players"
)]
struct Cli {
    /// Search depth in plies; overrides --difficulty
    #[arg(long, value_name = "PLIES")]
    depth: Option<u8>,

    /// Named search depth for AI players
    #[arg(long, value_enum, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Seed for the random players (system entropy if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Evaluation function used by AI players
    #[arg(long, value_enum, default_value_t = EvaluatorPreset::Phased)]
    evaluator: EvaluatorPreset,

    #[arg(long, value_enum, default_value_t = PlayerKind::Ai)]
    max_player: PlayerKind,

    #[arg(long, value_enum, default_value_t = PlayerKind::Random)]
    min_player: PlayerKind,

    /// Write the recorded search trees of every game as JSON
    #[arg(long, value_name = "FILE")]
    trace_out: Option<PathBuf>,
}

impl Cli {
    fn player_config(&self, kind: PlayerKind) -> PlayerConfig {
        match kind {
            PlayerKind::Random => PlayerConfig::Random,
            PlayerKind::Ai => PlayerConfig::AI {
                depth: self.depth.unwrap_or_else(|| self.difficulty.max_depth()),
            },
        }
    }

    fn game_config(&self) -> GameConfig {
        GameConfig {
            max_player: self.player_config(self.max_player),
            min_player: self.player_config(self.min_player),
            evaluator: self.evaluator,
            trace: self.trace_out.is_some(),
        }
    }
}

fn write_traces(path: &Path, summary: &MatchSummary) -> Result<()> {
    let traces: Vec<_> = summary.games.iter().map(|g| &g.traces).collect();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer(BufWriter::new(file), &traces)
        .with_context(|| format!("writing trace to {}", path.display()))?;
    info!("wrote {} traced games to {}", traces.len(), path.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.game_config();
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("seed {} evaluator {}", seed, config.evaluator.name());

    let summary = play_match(&config, cli.games, seed).context("match failed")?;

    for (index, game) in summary.games.iter().enumerate() {
        println!(
            "game {}: {} wins in {} moves",
            index + 1,
            game.result.winner().name(),
            game.moves.len()
        );
        println!("{}", game.final_state);
    }
    println!(
        "MAX {} - MIN {} ({} games)",
        summary.wins(Side::Max),
        summary.wins(Side::Min),
        summary.games_played()
    );

    if let Some(path) = &cli.trace_out {
        write_traces(path, &summary)?;
    }
    Ok(())
}
