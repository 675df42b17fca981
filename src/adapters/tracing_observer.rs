//! Observer that forwards session events to `tracing`

use tracing::{debug, info};

use crate::{
    Result,
    ports::GameObserver,
    tictactoe::{Board, Mark, MoveResult, Outcome},
};

/// Logs every session event. Attached to sessions built from a config by
/// default.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl GameObserver for TracingObserver {
    fn on_move(&mut self, result: &MoveResult, board: &Board) -> Result<()> {
        debug!(
            mark = %result.mark,
            position = %result.position,
            occupied = board.occupied_count(),
            "move played"
        );
        Ok(())
    }

    fn on_game_end(&mut self, outcome: Outcome, wins: [(Mark, u32); 2]) -> Result<()> {
        let [(_, x_wins), (_, o_wins)] = wins;
        match outcome {
            Outcome::Win(mark) => info!(winner = %mark, x_wins, o_wins, "game won"),
            _ => info!(x_wins, o_wins, "game drawn"),
        }
        Ok(())
    }

    fn on_reset(&mut self) -> Result<()> {
        debug!("board reset");
        Ok(())
    }

    fn on_names_changed(&mut self, x_name: &str, o_name: &str) -> Result<()> {
        debug!(x_name, o_name, "player names changed");
        Ok(())
    }
}
