//! noughts CLI - Tic-Tac-Toe against an exhaustive minimax engine
//!
//! Subcommands:
//! - Play an interactive game in the terminal
//! - Ask the engine for a move or a full move analysis
//! - Run engine-vs-engine self-play
//! - Verify that alpha-beta pruning never changes a decision

use anyhow::Result;
use clap::{Parser, Subcommand};
use noughts::cli::commands::{analyze, best_move, play, self_play, verify};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-Tac-Toe with a minimax computer opponent", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play(play::PlayArgs),

    /// Recommend a move for a board
    BestMove(best_move::BestMoveArgs),

    /// Score every candidate move on a board
    Analyze(analyze::AnalyzeArgs),

    /// Play the engine against itself
    SelfPlay(self_play::SelfPlayArgs),

    /// Compare pruned and exhaustive search on every reachable board
    Verify(verify::VerifyArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Play(args) => play::execute(args),
        Commands::BestMove(args) => best_move::execute(args),
        Commands::Analyze(args) => analyze::execute(args),
        Commands::SelfPlay(args) => self_play::execute(args),
        Commands::Verify(args) => verify::execute(args),
    }
}
