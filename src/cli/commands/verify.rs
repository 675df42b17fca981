//! Verify command - Check that pruning never changes a decision

use anyhow::{Result, bail};
use clap::Parser;
use indicatif::ProgressBar;
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    cli::output::{create_board_progress, format_number, print_kv, print_section},
    search::{Pruning, SearchEngine},
    tictactoe::{Board, Mark, Position, decision_boards},
};

#[derive(Parser, Debug)]
#[command(about = "Compare pruned and exhaustive search on every reachable board")]
pub struct VerifyArgs {
    /// Mark that opens the enumerated games
    #[arg(long, default_value = "X")]
    pub first: Mark,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,
}

/// A board on which the two search modes chose differently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub board: Board,
    /// Mark the engine played
    pub mark: Mark,
    pub pruned: Option<Position>,
    pub exhaustive: Option<Position>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub boards: usize,
    pub pruned_nodes: u64,
    pub exhaustive_nodes: u64,
    pub mismatches: Vec<Mismatch>,
}

/// Search every non-terminal reachable board once with pruning and once
/// without, for each computer mark, and collect the boards where the moves
/// differ.
pub fn compare_pruning(first: Mark, pb: Option<&ProgressBar>) -> VerifyReport {
    let mut report = VerifyReport::default();

    for node in decision_boards(first) {
        for mark in [node.to_move, node.to_move.opponent()] {
            let pruned = SearchEngine::new(mark).search(&node.board);
            let exhaustive = SearchEngine::new(mark)
                .with_pruning(Pruning::Disabled)
                .search(&node.board);

            report.pruned_nodes += pruned.stats.nodes;
            report.exhaustive_nodes += exhaustive.stats.nodes;

            if pruned.best_move != exhaustive.best_move {
                warn!(board = %node.board, %mark, "pruned and exhaustive search disagree");
                report.mismatches.push(Mismatch {
                    board: node.board,
                    mark,
                    pruned: pruned.best_move,
                    exhaustive: exhaustive.best_move,
                });
            }
        }
        report.boards += 1;

        if let Some(pb) = pb {
            pb.inc(1);
        }
    }

    report
}

pub fn execute(args: VerifyArgs) -> Result<()> {
    let total = decision_boards(args.first).len();
    info!(boards = total, first = %args.first, "verifying pruning");

    let pb = if args.progress {
        Some(create_board_progress(total as u64)?)
    } else {
        None
    };
    if let Some(pb) = &pb {
        pb.set_message("comparing");
    }

    let report = compare_pruning(args.first, pb.as_ref());

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    print_section("Pruning Verification");
    print_kv("Boards checked", &format_number(report.boards as u64));
    print_kv("Pruned nodes", &format_number(report.pruned_nodes));
    print_kv("Exhaustive nodes", &format_number(report.exhaustive_nodes));
    print_kv("Mismatches", &format_number(report.mismatches.len() as u64));

    if !report.mismatches.is_empty() {
        for mismatch in &report.mismatches {
            println!(
                "\n{}\n  computer {}: pruned {:?}, exhaustive {:?}",
                mismatch.board, mismatch.mark, mismatch.pruned, mismatch.exhaustive
            );
        }
        bail!("{} board(s) where pruning changed the move", report.mismatches.len());
    }
    Ok(())
}
