//! Output formatting and progress bars for CLI

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::{Board, Mark, Position};

/// Create a progress bar counting checked boards
pub fn create_board_progress(total_boards: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_boards);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} boards ({msg})")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Create a progress bar counting games
pub fn create_game_progress(total_games: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Format a number with thousands separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i.is_multiple_of(3) {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }
    result
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Render a board with row and column headers
///
/// ```text
///   0   1   2
/// 0 X | O |
///   ---|---|---
/// 1   | X |
///   ---|---|---
/// 2   |   | O
/// ```
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("  0   1   2\n");
    for (r, row) in board.cells().iter().enumerate() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| cell.map_or(' ', Mark::to_char).to_string())
            .collect();
        out.push_str(&format!("{r} {}\n", cells.join(" | ")));
        if r < 2 {
            out.push_str("  ---|---|---\n");
        }
    }
    out
}

pub fn describe_move(position: Option<Position>) -> String {
    match position {
        Some(pos) => format!("row {} col {}", pos.row, pos.col),
        None => "no move (board is full)".to_string(),
    }
}
