//! Core module - pure game logic with no external dependencies
//!
//! Board, win detection, and the match state machine. Zero dependencies on
//! UI or I/O, so everything here is unit-testable.

pub mod board;
pub mod game_state;
pub mod win;

pub use board::Board;
pub use game_state::{GameState, MoveOutcome, Phase};
pub use win::winner;
