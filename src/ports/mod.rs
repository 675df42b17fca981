//! Ports (trait boundaries) between the game core and its surroundings.
//!
//! The session drives the game and reports through these traits; a
//! presentation layer implements them to react to moves, finished games and
//! resets without the core knowing how anything is displayed.

pub mod observer;

pub use observer::GameObserver;
