//! CLI infrastructure for the noughts binary
//!
//! Subcommands query the search engine, play interactive games and check the
//! engine against itself.

pub mod commands;
pub mod output;
