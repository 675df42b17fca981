//! Self-play command - Pit the engine against itself

use anyhow::{Result, bail};
use clap::Parser;
use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    Error,
    cli::output::{create_game_progress, format_number, print_kv, print_section},
    search::{Pruning, SearchEngine},
    tictactoe::{Game, Mark, Outcome},
};

#[derive(Parser, Debug)]
#[command(about = "Play the engine against itself")]
pub struct SelfPlayArgs {
    /// Number of games to play
    #[arg(long, short = 'n', default_value_t = 100)]
    pub games: usize,

    /// Random moves played before the engines take over
    #[arg(long, default_value_t = 0)]
    pub random_opening: usize,

    /// Mark that opens every game
    #[arg(long, default_value = "X")]
    pub first: Mark,

    /// Random seed for the opening moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Search every subtree instead of pruning
    #[arg(long)]
    pub no_pruning: bool,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Tally of finished self-play games
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SelfPlaySummary {
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl SelfPlaySummary {
    pub fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Win(Mark::X) => self.x_wins += 1,
            Outcome::Win(Mark::O) => self.o_wins += 1,
            Outcome::Draw | Outcome::Undetermined => self.draws += 1,
        }
    }

    pub fn decisive(&self) -> usize {
        self.x_wins + self.o_wins
    }
}

/// Play one game between two engines.
///
/// The first `random_opening` moves are drawn uniformly from the empty cells;
/// the engines choose every move after that.
pub fn play_game(
    first: Mark,
    random_opening: usize,
    pruning: Pruning,
    rng: &mut StdRng,
) -> crate::Result<Game> {
    let engines = [
        SearchEngine::new(Mark::X).with_pruning(pruning),
        SearchEngine::new(Mark::O).with_pruning(pruning),
    ];
    let mut game = Game::with_first(first);

    while !game.is_over() {
        let position = if game.moves().len() < random_opening {
            game.board()
                .empty_positions()
                .choose(rng)
                .copied()
                .ok_or(Error::NoValidMoves)?
        } else {
            let engine = match game.to_move() {
                Mark::X => engines[0],
                Mark::O => engines[1],
            };
            engine.best_move(game.board()).ok_or(Error::NoValidMoves)?
        };
        game.play(position)?;
    }

    Ok(game)
}

pub fn execute(args: SelfPlayArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let pruning = if args.no_pruning {
        Pruning::Disabled
    } else {
        Pruning::AlphaBeta
    };
    info!(games = args.games, seed, random_opening = args.random_opening, "starting self-play");

    let pb = if args.progress {
        Some(create_game_progress(args.games as u64)?)
    } else {
        None
    };

    let mut summary = SelfPlaySummary::default();
    for index in 0..args.games {
        let game = play_game(args.first, args.random_opening, pruning, &mut rng)?;
        debug!(game = index, outcome = ?game.outcome(), moves = game.moves().len(), "game finished");
        summary.record(game.outcome());

        if let Some(pb) = &pb {
            pb.set_message(format!("{} decisive", summary.decisive()));
            pb.inc(1);
        }
    }
    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_section("Self-Play Complete");
        print_kv("Seed", &seed.to_string());
        print_kv("Games", &format_number(summary.games as u64));
        print_kv("X wins", &format_number(summary.x_wins as u64));
        print_kv("O wins", &format_number(summary.o_wins as u64));
        print_kv("Draws", &format_number(summary.draws as u64));
    }

    if args.random_opening == 0 && summary.decisive() > 0 {
        bail!(
            "optimal self-play produced {} decisive game(s); expected only draws",
            summary.decisive()
        );
    }
    Ok(())
}
