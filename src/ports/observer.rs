//! Observer port - how a presentation layer follows a session

use crate::{
    Result,
    tictactoe::{Board, Mark, MoveResult, Outcome},
};

/// Observer trait for following a session
///
/// # Event Sequence
///
/// 1. `on_move(result, board)` - after every accepted move, human or computer
/// 2. `on_game_end(outcome, tallies)` - once, right after the finishing move
/// 3. `on_reset()` - when the board is cleared for another game
///
/// `on_names_changed` can arrive at any point.
///
/// # Examples
///
/// ```
/// use noughts::{ports::GameObserver, tictactoe::Outcome};
///
/// struct GameCounter {
///     finished: usize,
/// }
///
/// impl GameObserver for GameCounter {
///     fn on_game_end(&mut self, _outcome: Outcome, _wins: [(noughts::Mark, u32); 2]) -> noughts::Result<()> {
///         self.finished += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait GameObserver: Send {
    /// Called after a move has been applied.
    ///
    /// `board` is the position after the move.
    fn on_move(&mut self, _result: &MoveResult, _board: &Board) -> Result<()> {
        Ok(())
    }

    /// Called once when a game reaches a win or a draw.
    ///
    /// `wins` holds the updated tallies for X and O, in that order.
    fn on_game_end(&mut self, _outcome: Outcome, _wins: [(Mark, u32); 2]) -> Result<()> {
        Ok(())
    }

    /// Called after the board has been cleared. Tallies are kept.
    fn on_reset(&mut self) -> Result<()> {
        Ok(())
    }

    fn on_names_changed(&mut self, _x_name: &str, _o_name: &str) -> Result<()> {
        Ok(())
    }
}
