//! Analyze command - Score every candidate move

use anyhow::Result;
use clap::Parser;

use super::infer_mark_to_move;
use crate::{
    cli::output::{print_section, render_board},
    search::{DRAW_SCORE, LOSS_SCORE, Score, SearchEngine, WIN_SCORE},
    tictactoe::{Board, Mark},
};

#[derive(Parser, Debug)]
#[command(about = "Show the minimax score of every empty cell")]
pub struct AnalyzeArgs {
    /// Board as 9 row-major cells
    pub board: Board,

    /// Mark the computer plays (inferred from the counts when omitted)
    #[arg(long, short = 'm')]
    pub mark: Option<Mark>,
}

fn verdict(score: Score) -> &'static str {
    match score {
        WIN_SCORE => "forced win",
        LOSS_SCORE => "loses against best play",
        DRAW_SCORE => "draw",
        _ => "unknown",
    }
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let mark = args.mark.unwrap_or_else(|| infer_mark_to_move(&args.board));
    let engine = SearchEngine::new(mark);
    let scores = engine.evaluate_moves(&args.board);
    let best = engine.best_move(&args.board);

    print_section(&format!("Move analysis for {mark}"));
    println!("{}", render_board(&args.board));

    if scores.is_empty() {
        println!("  (board is full)");
        return Ok(());
    }

    for (pos, score) in scores {
        let marker = if Some(pos) == best { "*" } else { " " };
        println!(
            "{marker} row {} col {}  {score:>3}  {}",
            pos.row,
            pos.col,
            verdict(score)
        );
    }
    Ok(())
}
