//! Board module - manages the 3x3 grid
//!
//! Each of the 9 cells is empty or owned by a player.
//! Uses a flat fixed array; index = row * 3 + col with row and col in 0..3.

use crate::types::{Player, CELL_COUNT};

/// The game board - 9 cells in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Player>; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Get the owner of a cell.
    /// Returns None for out-of-range indices and for unplayed cells alike;
    /// use [`Board::is_played`] to distinguish when it matters.
    pub fn get(&self, idx: usize) -> Option<Player> {
        self.cells.get(idx).copied().flatten()
    }

    /// Whether a cell already carries a mark.
    pub fn is_played(&self, idx: usize) -> bool {
        matches!(self.cells.get(idx), Some(Some(_)))
    }

    /// Place a player's mark on an unplayed cell.
    ///
    /// Returns false (and leaves the board untouched) when the index is out
    /// of range or the cell is already owned. Marks are never overwritten;
    /// only [`Board::reset`] clears them.
    pub fn play(&mut self, idx: usize, player: Player) -> bool {
        match self.cells.get_mut(idx) {
            Some(slot @ None) => {
                *slot = Some(player);
                true
            }
            _ => false,
        }
    }

    /// Number of played cells.
    pub fn moves(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Whether all 9 cells are played.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Clear every cell.
    pub fn reset(&mut self) {
        self.cells = [None; CELL_COUNT];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
