//! Core engine types: players, board, RNG, configuration, errors.
//!
//! Nothing here knows about win conditions or turn order; those live in
//! `rules` and `engine`.

pub mod player;
pub mod board;
pub mod rng;
pub mod config;
pub mod error;

pub use player::Player;
pub use board::{Board, Cell};
pub use rng::{Alternating, FixedStart, GameRng, StartingPlayerSource};
pub use config::{EngineConfig, DEFAULT_BOARD_SIZE};
pub use error::GameError;
