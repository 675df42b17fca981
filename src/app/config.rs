//! Configuration types for session creation.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, search::Pruning, tictactoe::Mark};

/// Who sits in the two seats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    #[default]
    HumanVsHuman,
    HumanVsComputer,
}

/// Configuration for creating a [`super::Session`].
///
/// # Examples
///
/// ```
/// use noughts::app::{GameMode, SessionConfig};
/// use noughts::Mark;
///
/// let config = SessionConfig::new(GameMode::HumanVsComputer)
///     .with_computer_mark(Mark::X)
///     .with_names("Ada", "Deep Thought");
/// assert_eq!(config.x_name, "Deep Thought");
/// assert_eq!(config.o_name, "Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub mode: GameMode,
    /// Mark played by the computer in [`GameMode::HumanVsComputer`]
    pub computer_mark: Mark,
    /// Mark that opens every game
    pub first_player: Mark,
    pub x_name: String,
    pub o_name: String,
    pub pruning: Pruning,
}

pub const DEFAULT_X_NAME: &str = "Player X";
pub const DEFAULT_O_NAME: &str = "Player O";
pub const DEFAULT_HUMAN_NAME: &str = "You";
pub const DEFAULT_COMPUTER_NAME: &str = "AI";

impl SessionConfig {
    /// Create a configuration with default names for the mode.
    ///
    /// Defaults:
    /// - Names: "Player X"/"Player O" for two humans, "You"/"AI" against the
    ///   computer
    /// - Computer mark: O
    /// - First player: X
    pub fn new(mode: GameMode) -> Self {
        let computer_mark = Mark::O;
        let (x_name, o_name) = Self::default_names(mode, computer_mark);
        Self {
            mode,
            computer_mark,
            first_player: Mark::X,
            x_name: x_name.to_string(),
            o_name: o_name.to_string(),
            pruning: Pruning::default(),
        }
    }

    /// Default seat names for a mode, X first
    pub fn default_names(mode: GameMode, computer_mark: Mark) -> (&'static str, &'static str) {
        match (mode, computer_mark) {
            (GameMode::HumanVsHuman, _) => (DEFAULT_X_NAME, DEFAULT_O_NAME),
            (GameMode::HumanVsComputer, Mark::O) => (DEFAULT_HUMAN_NAME, DEFAULT_COMPUTER_NAME),
            (GameMode::HumanVsComputer, Mark::X) => (DEFAULT_COMPUTER_NAME, DEFAULT_HUMAN_NAME),
        }
    }

    /// Set the computer's mark, moving the default names along with it.
    pub fn with_computer_mark(mut self, mark: Mark) -> Self {
        if mark != self.computer_mark {
            std::mem::swap(&mut self.x_name, &mut self.o_name);
        }
        self.computer_mark = mark;
        self
    }

    pub fn with_first_player(mut self, mark: Mark) -> Self {
        self.first_player = mark;
        self
    }

    /// Set the human and computer names (or X and O names for two humans).
    pub fn with_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        let (first, second) = (first.into(), second.into());
        match (self.mode, self.computer_mark) {
            (GameMode::HumanVsComputer, Mark::X) => {
                self.o_name = first;
                self.x_name = second;
            }
            _ => {
                self.x_name = first;
                self.o_name = second;
            }
        }
        self
    }

    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    /// The mark controlled by the computer, if any
    pub fn computer(&self) -> Option<Mark> {
        match self.mode {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsComputer => Some(self.computer_mark),
        }
    }

    /// Reject blank player names
    pub fn validate(&self) -> Result<()> {
        for (mark, name) in [(Mark::X, &self.x_name), (Mark::O, &self.o_name)] {
            if name.trim().is_empty() {
                return Err(Error::InvalidConfiguration {
                    message: format!("name for {mark} must not be blank"),
                });
            }
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names_follow_mode() {
        let humans = SessionConfig::new(GameMode::HumanVsHuman);
        assert_eq!((humans.x_name.as_str(), humans.o_name.as_str()), ("Player X", "Player O"));
        assert_eq!(humans.computer(), None);

        let computer = SessionConfig::new(GameMode::HumanVsComputer);
        assert_eq!((computer.x_name.as_str(), computer.o_name.as_str()), ("You", "AI"));
        assert_eq!(computer.computer(), Some(Mark::O));
    }

    #[test]
    fn test_computer_mark_moves_names() {
        let config = SessionConfig::new(GameMode::HumanVsComputer).with_computer_mark(Mark::X);
        assert_eq!(config.x_name, "AI");
        assert_eq!(config.o_name, "You");

        let unchanged = SessionConfig::new(GameMode::HumanVsComputer).with_computer_mark(Mark::O);
        assert_eq!(unchanged.x_name, "You");
    }

    #[test]
    fn test_validate_rejects_blank_names() {
        let config = SessionConfig::default().with_names("  ", "Bob");
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration { .. })
        ));
        assert!(SessionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_serializes() {
        let config = SessionConfig::new(GameMode::HumanVsComputer);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"human-vs-computer\""));
        let back: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
