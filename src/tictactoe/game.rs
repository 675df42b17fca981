//! Authoritative game state: board, turn, history and terminal status

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Mark, Position},
    lines::{self, Line, Outcome},
};
use crate::{Error, Result};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: Position,
    pub mark: Mark,
}

/// What happened after a move was played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub position: Position,
    pub mark: Mark,
    pub outcome: Outcome,
    /// The completed line when the move won the game
    pub winning_line: Option<Line>,
}

impl MoveResult {
    pub fn winner(&self) -> Option<Mark> {
        self.outcome.winner()
    }

    pub fn is_draw(&self) -> bool {
        self.outcome == Outcome::Draw
    }
}

/// A game in progress or finished
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    first: Mark,
    to_move: Mark,
    moves: Vec<Move>,
    outcome: Outcome,
}

impl Game {
    /// Create a new game with X to move
    pub fn new() -> Self {
        Self::with_first(Mark::X)
    }

    /// Create a new game with the given mark moving first
    pub fn with_first(first: Mark) -> Self {
        Game {
            board: Board::new(),
            first,
            to_move: first,
            moves: Vec::new(),
            outcome: Outcome::Undetermined,
        }
    }

    /// Play a move for the mark to move.
    ///
    /// The turn only passes to the opponent while the game continues; after
    /// a terminal move `to_move` still names the player who finished it.
    pub fn play(&mut self, position: Position) -> Result<MoveResult> {
        if self.is_over() {
            return Err(Error::GameOver);
        }

        let mark = self.to_move;
        self.board = self.board.with_mark(position, mark)?;
        self.moves.push(Move { position, mark });
        self.outcome = lines::outcome(&self.board);

        let winning_line = match self.outcome {
            Outcome::Win(_) => lines::winning_line(&self.board),
            _ => None,
        };
        if !self.outcome.is_terminal() {
            self.to_move = mark.opponent();
        }

        Ok(MoveResult {
            position,
            mark,
            outcome: self.outcome,
            winning_line,
        })
    }

    /// Validate raw coordinates, then [`Game::play`]
    pub fn play_at(&mut self, row: usize, col: usize) -> Result<MoveResult> {
        self.play(Position::new(row, col)?)
    }

    /// Clear the board and give the first mark the move again
    pub fn reset(&mut self) {
        *self = Self::with_first(self.first);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    pub fn first(&self) -> Mark {
        self.first
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn winner(&self) -> Option<Mark> {
        self.outcome.winner()
    }

    pub fn is_draw(&self) -> bool {
        self.outcome == Outcome::Draw
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
