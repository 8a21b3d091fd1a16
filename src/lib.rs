//! # grid-tictactoe
//!
//! Game-state engine for two-player tic-tac-toe on an N×N grid
//! (4×4 by default). A line of N identical marks wins.
//!
//! ## Design Principles
//!
//! 1. **Pure state machine**: No I/O. The engine answers queries and
//!    applies moves; a presentation layer decides how to react.
//!
//! 2. **Hardened moves**: Off-board and occupied cells are rejected with
//!    a `GameError`, never silently overwritten. Rejected moves leave the
//!    engine unchanged.
//!
//! 3. **Injectable randomness**: The starting player comes from a
//!    `StartingPlayerSource`, so games are reproducible under test.
//!
//! ## Modules
//!
//! - `core`: Players, board grid, RNG, configuration, errors
//! - `rules`: Line enumeration and win/draw evaluation
//! - `engine`: `GameEngine`, the owned game state machine

pub mod core;
pub mod rules;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Player, Board, Cell,
    GameRng, StartingPlayerSource, FixedStart, Alternating,
    EngineConfig, DEFAULT_BOARD_SIZE,
    GameError,
};

pub use crate::rules::{Line, Outcome};

pub use crate::engine::{GameEngine, MoveRecord};
