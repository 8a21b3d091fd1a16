//! Engine configuration.

use serde::{Deserialize, Serialize};

/// Default board side length.
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Engine construction parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Side length of the square board (default: 4).
    /// A line of this many identical marks wins.
    pub board_size: usize,

    /// Seed for starting-player selection.
    /// `None` draws a fresh seed from the process random source.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create a new config with custom board size.
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Create a new config with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
