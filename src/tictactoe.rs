//! Tic-Tac-Toe board, outcome evaluation and game bookkeeping

pub mod board;
pub mod game;
pub mod game_tree;
pub mod lines;

pub use board::{Board, Cell, Mark, Position};
pub use game::{Game, Move, MoveResult};
pub use game_tree::{ReachableBoard, decision_boards, reachable_boards};
pub use lines::{LINES, Line, Outcome, is_full, line_winner, outcome, winning_line};
