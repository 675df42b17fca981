//! Tic-Tac-Toe with an exhaustive minimax computer opponent
//!
//! This crate provides:
//! - Board, winning-line and outcome evaluation for the 3x3 game
//! - A minimax search engine with alpha-beta pruning that picks optimal
//!   moves for the computer seat
//! - An authoritative game engine and a session layer with seats, names and
//!   win tallies
//! - A command-line front end (`noughts`)
//!
//! ```
//! use noughts::{Board, Mark, Position, SearchEngine};
//!
//! let board: Board = "OO. XX. ...".parse()?;
//! let engine = SearchEngine::new(Mark::O);
//! assert_eq!(engine.best_move(&board), Some(Position::new(0, 2)?));
//! # Ok::<(), noughts::Error>(())
//! ```

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod ports;
pub mod search;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{Pruning, Score, SearchEngine, SearchReport, SearchStats};
pub use tictactoe::{Board, Cell, Mark, Outcome, Position};
