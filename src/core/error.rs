//! Engine error types.
//!
//! Every rejected operation leaves the engine unchanged, so none of
//! these are fatal. Callers typically surface them and let the player
//! pick another cell.

use derive_more::{Display, Error};

use crate::core::player::Player;
use crate::rules::Outcome;

/// Reasons a query or move is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Row or column lies outside `[0, size)`.
    #[display("coordinate ({row}, {column}) is outside a {size}x{size} board")]
    InvalidCoordinate {
        row: usize,
        column: usize,
        size: usize,
    },

    /// Move onto a cell that already holds a mark.
    #[display("cell ({row}, {column}) is already occupied by {occupant}")]
    OccupiedCell {
        row: usize,
        column: usize,
        occupant: Player,
    },

    /// Move attempted after the game reached a terminal outcome.
    #[display("game is over ({outcome}); reset to play again")]
    GameOver { outcome: Outcome },
}
