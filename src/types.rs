//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Cells per grid side
pub const GRID_DIM: usize = 3;
/// Total cells on the board
pub const CELL_COUNT: usize = GRID_DIM * GRID_DIM;

/// The 8 winning lines by board index (index = row * 3 + col):
/// three rows, three columns, two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Line sum identifying three player-1 marks (3 * weight 1)
pub const P1_LINE_SUM: u8 = 3;
/// Line sum identifying three player-2 marks (3 * weight 4)
pub const P2_LINE_SUM: u8 = 12;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Mark weight used by sum-based win detection.
    ///
    /// Unplayed cells contribute 0, so the weights {1, 4} guarantee that no
    /// mixed line of three marks can sum to 3 or 12.
    pub fn weight(&self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 4,
        }
    }

    /// The other player.
    pub fn opponent(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Character drawn in a cell owned by this player.
    pub fn glyph(&self) -> char {
        match self {
            Player::One => 'O',
            Player::Two => 'X',
        }
    }

    /// Display name.
    pub fn label(&self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}

/// Actions the game loop reacts to, decoded from raw terminal events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Left mouse button pressed at terminal coordinates (x, y).
    Click { x: u16, y: u16 },
    /// Start a fresh round (scores are kept).
    Reset,
    /// Leave the game.
    Quit,
}
