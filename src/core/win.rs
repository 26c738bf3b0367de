//! Win detection - pure function over the 9-cell board
//!
//! Lines are scored by summing the mark weights of their played cells.
//! With weights {1, 4} (and 0 for unplayed) a sum of 3 can only be three
//! player-1 marks and a sum of 12 only three player-2 marks; no mixed line
//! can produce either value.

use crate::core::Board;
use crate::types::{Player, LINES, P1_LINE_SUM, P2_LINE_SUM};

/// Find the player owning a completed row, column, or diagonal.
///
/// Returns the winner of the first completed line in [`LINES`] order, or
/// `None` when no line is complete. A full board with no line is a draw,
/// which the game state detects separately from the move count.
pub fn winner(board: &Board) -> Option<Player> {
    for line in LINES {
        let sum: u8 = line
            .iter()
            .filter_map(|&idx| board.get(idx))
            .map(|player| player.weight())
            .sum();

        if sum == P1_LINE_SUM {
            return Some(Player::One);
        }
        if sum == P2_LINE_SUM {
            return Some(Player::Two);
        }
    }
    None
}
