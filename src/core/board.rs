//! Board grid storage.
//!
//! ## Cell
//!
//! A single grid position: empty or holding one player's mark.
//!
//! ## Board
//!
//! Square grid of side `size`, stored row-major in a `Vec<Cell>`.
//! The size is fixed at construction; every accessor is bounds-checked
//! and reports `GameError::InvalidCoordinate` instead of panicking.

use serde::{Deserialize, Serialize};

use crate::core::error::GameError;
use crate::core::player::Player;

/// Contents of one grid position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player whose mark is in this cell, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Square `size x size` grid in row-major order.
///
/// ## Example
///
/// ```
/// use grid_tictactoe::{Board, Cell};
///
/// let board = Board::new(4);
/// assert_eq!(board.size(), 4);
/// assert_eq!(board.get(3, 3), Ok(Cell::Empty));
/// assert!(board.get(4, 0).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board size must be at least 1");

        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `(row, column)` lies on the board.
    #[must_use]
    pub fn contains(&self, row: usize, column: usize) -> bool {
        row < self.size && column < self.size
    }

    fn index(&self, row: usize, column: usize) -> Result<usize, GameError> {
        if self.contains(row, column) {
            Ok(row * self.size + column)
        } else {
            Err(GameError::InvalidCoordinate {
                row,
                column,
                size: self.size,
            })
        }
    }

    /// Get the cell at `(row, column)`.
    pub fn get(&self, row: usize, column: usize) -> Result<Cell, GameError> {
        let index = self.index(row, column)?;
        Ok(self.cells[index])
    }

    /// Overwrite the cell at `(row, column)`.
    ///
    /// Occupancy rules are enforced by the engine, not here.
    pub(crate) fn set(&mut self, row: usize, column: usize, cell: Cell) -> Result<(), GameError> {
        let index = self.index(row, column)?;
        self.cells[index] = cell;
        Ok(())
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Whether every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                let mark = cell.player().map_or('.', Player::mark);
                write!(f, "{}", mark)?;
            }
        }
        Ok(())
    }
}
