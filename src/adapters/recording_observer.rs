//! In-memory observer that records every event

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::GameObserver,
    tictactoe::{Board, Mark, MoveResult, Outcome},
};

/// One observed session event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordedEvent {
    Move { result: MoveResult, board: Board },
    GameEnd { outcome: Outcome, wins: [(Mark, u32); 2] },
    Reset,
    NamesChanged { x_name: String, o_name: String },
}

/// Records events into a shared log.
///
/// Clones share the same log, so a test can keep one handle and hand the
/// other to the session.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Arc<Mutex<Vec<RecordedEvent>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    fn push(&self, event: RecordedEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl GameObserver for RecordingObserver {
    fn on_move(&mut self, result: &MoveResult, board: &Board) -> Result<()> {
        self.push(RecordedEvent::Move {
            result: *result,
            board: *board,
        });
        Ok(())
    }

    fn on_game_end(&mut self, outcome: Outcome, wins: [(Mark, u32); 2]) -> Result<()> {
        self.push(RecordedEvent::GameEnd { outcome, wins });
        Ok(())
    }

    fn on_reset(&mut self) -> Result<()> {
        self.push(RecordedEvent::Reset);
        Ok(())
    }

    fn on_names_changed(&mut self, x_name: &str, o_name: &str) -> Result<()> {
        self.push(RecordedEvent::NamesChanged {
            x_name: x_name.to_string(),
            o_name: o_name.to_string(),
        });
        Ok(())
    }
}
