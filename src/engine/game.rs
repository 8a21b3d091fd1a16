//! Game engine implementation.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::{
    Board, Cell, EngineConfig, GameError, GameRng, Player, StartingPlayerSource,
};
use crate::rules::{self, Line, Outcome};

/// One accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    pub row: usize,
    pub column: usize,
    /// The mover.
    pub player: Player,
}

/// Two-player N×N tic-tac-toe state machine.
///
/// The starting player of each game comes from the injected
/// `StartingPlayerSource`, sampled once on construction and once per
/// `reset()`.
///
/// ## Example
///
/// ```
/// use grid_tictactoe::{FixedStart, GameEngine, Outcome, Player};
///
/// let mut engine = GameEngine::with_source(4, FixedStart(Player::PlayerOne));
///
/// let mover = engine.make_move(0, 0).unwrap();
/// assert_eq!(mover, Player::PlayerOne);
/// assert_eq!(engine.current_player(), Player::PlayerTwo);
/// assert!(!engine.is_valid_move(0, 0));
/// assert_eq!(engine.check_game_end(), Outcome::Ongoing);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine<S = GameRng> {
    board: Board,
    current_player: Player,
    starting_player: Player,
    history: Vec<MoveRecord>,
    source: S,
}

impl GameEngine<GameRng> {
    /// Create an engine whose starting player is drawn from the process
    /// random source.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self::with_source(size, GameRng::from_entropy())
    }

    /// Create an engine from a config.
    ///
    /// # Panics
    ///
    /// Panics if `config.board_size` is zero.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_source(config.board_size, rng)
    }
}

impl Default for GameEngine<GameRng> {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl<S: StartingPlayerSource> GameEngine<S> {
    /// Create an engine with an injected starting-player source.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn with_source(size: usize, mut source: S) -> Self {
        let starting_player = source.pick_starting_player();
        debug!(size, %starting_player, "new game");

        Self {
            board: Board::new(size),
            current_player: starting_player,
            starting_player,
            history: Vec::with_capacity(size * size),
            source,
        }
    }

    /// Side length of the board.
    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// The player who moves next.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The player who moved first in the current game.
    #[must_use]
    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the cell at `(row, column)`.
    pub fn cell(&self, row: usize, column: usize) -> Result<Cell, GameError> {
        self.board.get(row, column)
    }

    /// Moves accepted in the current game, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// The injected starting-player source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Whether `(row, column)` is on the board and empty.
    ///
    /// Out-of-range coordinates return `false` rather than erroring.
    /// This only inspects the board; use `validate_move` for the reason
    /// a cell is unavailable.
    #[must_use]
    pub fn is_valid_move(&self, row: usize, column: usize) -> bool {
        self.validate_move(row, column).is_ok()
    }

    /// Check that `(row, column)` is on the board and empty.
    pub fn validate_move(&self, row: usize, column: usize) -> Result<(), GameError> {
        match self.board.get(row, column)? {
            Cell::Empty => Ok(()),
            Cell::Occupied(occupant) => Err(GameError::OccupiedCell {
                row,
                column,
                occupant,
            }),
        }
    }

    /// Place the current player's mark at `(row, column)` and pass the turn.
    ///
    /// Returns the mover. Rejected moves leave the engine unchanged.
    ///
    /// # Errors
    ///
    /// - `GameOver` if `check_game_end()` is already terminal
    /// - `InvalidCoordinate` if the cell is off the board
    /// - `OccupiedCell` if the cell already holds a mark
    #[instrument(level = "debug", skip(self), fields(player = %self.current_player))]
    pub fn make_move(&mut self, row: usize, column: usize) -> Result<Player, GameError> {
        let outcome = self.check_game_end();
        if outcome.is_terminal() {
            debug!(%outcome, "move rejected: game is over");
            return Err(GameError::GameOver { outcome });
        }

        if let Err(err) = self.validate_move(row, column) {
            debug!(%err, "move rejected");
            return Err(err);
        }

        let mover = self.current_player;
        self.board.set(row, column, Cell::Occupied(mover))?;
        self.history.push(MoveRecord {
            row,
            column,
            player: mover,
        });
        self.current_player = mover.opponent();
        debug!(move_count = self.history.len(), "move applied");

        let outcome = self.check_game_end();
        if outcome.is_terminal() {
            info!(%outcome, moves = self.history.len(), "game ended");
        }

        Ok(mover)
    }

    /// Evaluate the current board.
    ///
    /// `Win` takes priority over `Draw` when the board is both full and won.
    #[must_use]
    pub fn check_game_end(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// The first complete line and its owner, if the game is won.
    #[must_use]
    pub fn winning_line(&self) -> Option<(Line, Player)> {
        rules::winning_line(&self.board)
    }

    /// Discard the current game and start a fresh one.
    ///
    /// The board is cleared and a new starting player is sampled.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        let size = self.board.size();
        self.board = Board::new(size);
        self.history.clear();
        self.starting_player = self.source.pick_starting_player();
        self.current_player = self.starting_player;
        debug!(starting_player = %self.starting_player, "game reset");
    }
}
