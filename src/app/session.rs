//! A running session: two seats, names, win tallies and the current game

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::config::{DEFAULT_O_NAME, DEFAULT_X_NAME, SessionConfig};
use crate::{
    Error, Result,
    adapters::TracingObserver,
    ports::GameObserver,
    search::SearchEngine,
    tictactoe::{Board, Game, Mark, MoveResult, Position},
};

/// Who chooses moves for a mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seat {
    Human,
    Computer(SearchEngine),
}

impl Seat {
    pub fn is_computer(&self) -> bool {
        matches!(self, Seat::Computer(_))
    }
}

/// Name, seat and tally for one mark
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub mark: Mark,
    pub name: String,
    pub wins: u32,
    pub seat: Seat,
}

/// Snapshot of the game for a presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub to_move: Mark,
    pub is_over: bool,
    pub winner: Option<Mark>,
    pub is_draw: bool,
}

/// Drives games between two seats and keeps score across resets
pub struct Session {
    config: SessionConfig,
    game: Game,
    /// X first, then O
    players: [PlayerInfo; 2],
    observers: Vec<Box<dyn GameObserver>>,
}

fn slot(mark: Mark) -> usize {
    match mark {
        Mark::X => 0,
        Mark::O => 1,
    }
}

impl Session {
    /// Create a session from a validated config, with a [`TracingObserver`]
    /// attached.
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;

        let seat_for = |mark: Mark| match config.computer() {
            Some(computer) if computer == mark => {
                Seat::Computer(SearchEngine::new(mark).with_pruning(config.pruning))
            }
            _ => Seat::Human,
        };
        let players = [
            PlayerInfo {
                mark: Mark::X,
                name: config.x_name.clone(),
                wins: 0,
                seat: seat_for(Mark::X),
            },
            PlayerInfo {
                mark: Mark::O,
                name: config.o_name.clone(),
                wins: 0,
                seat: seat_for(Mark::O),
            },
        ];

        Ok(Session {
            game: Game::with_first(config.first_player),
            config,
            players,
            observers: vec![Box::new(TracingObserver::new())],
        })
    }

    /// Attach another observer
    pub fn with_observer(mut self, observer: Box<dyn GameObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn board(&self) -> &Board {
        self.game.board()
    }

    pub fn state(&self) -> GameState {
        GameState {
            board: *self.game.board(),
            to_move: self.game.to_move(),
            is_over: self.game.is_over(),
            winner: self.game.winner(),
            is_draw: self.game.is_draw(),
        }
    }

    pub fn player(&self, mark: Mark) -> &PlayerInfo {
        &self.players[slot(mark)]
    }

    /// The player whose turn it is (or who finished the game)
    pub fn current_player(&self) -> &PlayerInfo {
        self.player(self.game.to_move())
    }

    /// Both players, X first
    pub fn player_stats(&self) -> &[PlayerInfo] {
        &self.players
    }

    pub fn is_computer_turn(&self) -> bool {
        self.current_player().seat.is_computer()
    }

    /// Play at `(row, col)` for whoever is to move.
    ///
    /// Seats are not checked here; a surface that should not let a human
    /// move for the computer asks [`Session::is_computer_turn`] first.
    #[instrument(level = "debug", skip(self))]
    pub fn play_move(&mut self, row: usize, col: usize) -> Result<MoveResult> {
        let position = Position::new(row, col)?;
        self.apply(position)
    }

    /// Let the computer seat move.
    ///
    /// Returns `Ok(None)` when the game is over or a human is to move.
    pub fn make_computer_move(&mut self) -> Result<Option<MoveResult>> {
        if self.game.is_over() {
            return Ok(None);
        }
        let Seat::Computer(engine) = self.current_player().seat else {
            return Ok(None);
        };

        let report = engine.search(self.game.board());
        debug!(
            mark = %engine.computer(),
            nodes = report.stats.nodes,
            "computer chose {:?}",
            report.best_move
        );
        let position = report.best_move.ok_or(Error::NoValidMoves)?;
        self.apply(position).map(Some)
    }

    /// Rename the players.
    ///
    /// Blank names fall back to "Player X"/"Player O"; a computer seat keeps
    /// its configured name.
    pub fn set_player_names(&mut self, x_name: &str, o_name: &str) -> Result<()> {
        for (player, requested, fallback) in [
            (0, x_name, DEFAULT_X_NAME),
            (1, o_name, DEFAULT_O_NAME),
        ] {
            let player = &mut self.players[player];
            if player.seat.is_computer() {
                continue;
            }
            let trimmed = requested.trim();
            player.name = if trimmed.is_empty() {
                fallback.to_string()
            } else {
                trimmed.to_string()
            };
        }

        let (x, o) = (self.players[0].name.clone(), self.players[1].name.clone());
        for observer in &mut self.observers {
            observer.on_names_changed(&x, &o)?;
        }
        Ok(())
    }

    /// Start a new game; tallies are kept
    pub fn reset(&mut self) -> Result<()> {
        self.game.reset();
        for observer in &mut self.observers {
            observer.on_reset()?;
        }
        Ok(())
    }

    fn apply(&mut self, position: Position) -> Result<MoveResult> {
        let result = self.game.play(position)?;

        if let Some(winner) = result.winner() {
            self.players[slot(winner)].wins += 1;
        }

        let board = *self.game.board();
        for observer in &mut self.observers {
            observer.on_move(&result, &board)?;
        }

        if result.outcome.is_terminal() {
            let wins = [
                (Mark::X, self.players[0].wins),
                (Mark::O, self.players[1].wins),
            ];
            for observer in &mut self.observers {
                observer.on_game_end(result.outcome, wins)?;
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::GameMode;

    #[test]
    fn test_human_vs_human_has_no_computer() {
        let session = Session::new(SessionConfig::new(GameMode::HumanVsHuman)).unwrap();
        assert!(!session.is_computer_turn());
        assert!(session.player_stats().iter().all(|p| p.seat == Seat::Human));
    }

    #[test]
    fn test_computer_seat_uses_configured_mark() {
        let session = Session::new(SessionConfig::new(GameMode::HumanVsComputer)).unwrap();
        assert_eq!(
            session.player(Mark::O).seat,
            Seat::Computer(SearchEngine::new(Mark::O))
        );
        assert_eq!(session.player(Mark::X).seat, Seat::Human);
    }

    #[test]
    fn test_computer_move_only_on_its_turn() {
        let mut session = Session::new(SessionConfig::new(GameMode::HumanVsComputer)).unwrap();
        assert!(session.make_computer_move().unwrap().is_none());

        session.play_move(0, 0).unwrap();
        assert!(session.is_computer_turn());
        let reply = session.make_computer_move().unwrap().unwrap();
        assert_eq!(reply.mark, Mark::O);
        // against a corner opening only the centre avoids a forced loss
        assert_eq!(reply.position, Position::new(1, 1).unwrap());
        assert!(!session.is_computer_turn());
    }

    #[test]
    fn test_rejected_move_leaves_state() {
        let mut session = Session::new(SessionConfig::default()).unwrap();
        session.play_move(1, 1).unwrap();
        let before = session.state();
        assert!(session.play_move(1, 1).is_err());
        assert!(session.play_move(5, 5).is_err());
        assert_eq!(session.state(), before);
    }
}
