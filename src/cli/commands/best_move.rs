//! Best-move command - Ask the engine for a recommendation

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use super::infer_mark_to_move;
use crate::{
    cli::output::{describe_move, format_number, print_kv, render_board},
    search::{Pruning, Score, SearchEngine, SearchStats},
    tictactoe::{Board, Mark, Position, outcome},
};

#[derive(Parser, Debug)]
#[command(about = "Recommend a move for the computer")]
pub struct BestMoveArgs {
    /// Board as 9 row-major cells, e.g. "XX. O.. .O."
    pub board: Board,

    /// Mark the computer plays (inferred from the counts when omitted)
    #[arg(long, short = 'm')]
    pub mark: Option<Mark>,

    /// Search every subtree instead of pruning
    #[arg(long)]
    pub no_pruning: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct BestMoveOutput {
    board: String,
    mark: Mark,
    best_move: Option<Position>,
    score: Option<Score>,
    stats: SearchStats,
}

pub fn execute(args: BestMoveArgs) -> Result<()> {
    let mark = args.mark.unwrap_or_else(|| infer_mark_to_move(&args.board));
    let pruning = if args.no_pruning {
        Pruning::Disabled
    } else {
        Pruning::AlphaBeta
    };

    if outcome(&args.board).is_terminal() {
        tracing::warn!("board is already decided; the recommendation is not meaningful");
    }

    let report = SearchEngine::new(mark).with_pruning(pruning).search(&args.board);

    if args.json {
        let output = BestMoveOutput {
            board: args.board.to_string().replace('\n', "/"),
            mark,
            best_move: report.best_move,
            score: report.score,
            stats: report.stats,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", render_board(&args.board));
    print_kv("Computer plays", &mark.to_string());
    print_kv("Best move", &describe_move(report.best_move));
    if let Some(score) = report.score {
        print_kv("Score", &score.to_string());
    }
    print_kv("Nodes searched", &format_number(report.stats.nodes));
    print_kv("Cutoffs", &format_number(report.stats.cutoffs));
    Ok(())
}
