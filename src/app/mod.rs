//! Application layer: session configuration and the session that drives a
//! game between two seats.
//!
//! # Usage
//!
//! ```
//! use noughts::app::{GameMode, Session, SessionConfig};
//!
//! let config = SessionConfig::new(GameMode::HumanVsComputer);
//! let mut session = Session::new(config)?;
//!
//! session.play_move(1, 1)?;
//! let reply = session.make_computer_move()?;
//! assert!(reply.is_some());
//! # Ok::<(), noughts::Error>(())
//! ```

pub mod config;
pub mod session;

pub use config::{GameMode, SessionConfig};
pub use session::{GameState, PlayerInfo, Seat, Session};
