//! Subcommand implementations

pub mod analyze;
pub mod best_move;
pub mod play;
pub mod self_play;
pub mod verify;

use crate::tictactoe::{Board, Mark};

/// Mark to move on a board opened by X: X when the counts are level, O when
/// X is one ahead.
pub(crate) fn infer_mark_to_move(board: &Board) -> Mark {
    if board.count(Mark::X) > board.count(Mark::O) {
        Mark::O
    } else {
        Mark::X
    }
}
