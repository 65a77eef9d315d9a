//! chess-replay - plays a list of coordinate moves and reports the outcome.

mod config;
mod replay;

use anyhow::Context;
use chess_core::Color;
use clap::Parser;
use config::ReplayConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Replays coordinate moves (e2-e4) from the starting position.
#[derive(Parser)]
#[command(name = "chess-replay")]
#[command(about = "Replays coordinate moves and reports check, mate or stalemate")]
struct Args {
    /// Moves such as e2-e4 or e2e4
    moves: Vec<String>,

    /// Read whitespace-separated moves from a file, after the positional ones
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config_path = args.config.unwrap_or_else(ReplayConfig::default_path);
    let config = ReplayConfig::load(&config_path)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("invalid log_level in configuration")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut moves = args.moves;
    if let Some(path) = &args.file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read moves from {}", path.display()))?;
        moves.extend(replay::split_moves(&content));
    }
    tracing::debug!(count = moves.len(), "replaying");

    let result = replay::replay(&moves, config.stop_on_illegal);

    if args.json {
        println!("{}", result.to_json()?);
        return Ok(());
    }

    for rejection in &result.rejected {
        println!(
            "Move {} ({}) rejected: {}",
            rejection.index + 1,
            rejection.text,
            rejection.reason
        );
    }
    println!("Status: {}", result.headline());
    if config.show_captured {
        for color in Color::ALL {
            println!("Captured by {}: {}", color, result.captured_glyphs(color));
        }
    }
    let tail = result.log_tail(config.history_tail);
    if !tail.is_empty() {
        println!("Moves ({} of {}):", tail.len(), result.game.ply_count());
        for line in tail {
            println!("  {}", line);
        }
    }

    Ok(())
}
