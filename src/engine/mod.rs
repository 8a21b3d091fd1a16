//! The game-state engine.
//!
//! `GameEngine` owns one live game: the board, whose turn it is, and the
//! moves played so far. It validates and applies moves, reports the
//! outcome on demand, and resets to a fresh game. It never calls back
//! into a presentation layer; callers react to `check_game_end()`.

mod game;

pub use game::{GameEngine, MoveRecord};
