//! Game state module - the match state machine
//!
//! Owns the board, the turn flag, and the running win counters. All mutable
//! game state lives in this struct and is threaded through the event loop;
//! nothing lives at module scope.

use crate::core::{win, Board};
use crate::types::{Player, CELL_COUNT};

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Clicks place marks and alternate turns.
    InProgress,
    /// A line is complete; the board is frozen until reset.
    Won(Player),
    /// All 9 cells played with no line; frozen until reset.
    Draw,
}

/// What a click did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Click landed outside the grid, on a played cell, or after the round
    /// ended. Nothing changed.
    Ignored,
    /// Mark placed, round continues with the other player.
    Placed,
    /// Mark placed and it completed a line.
    Won(Player),
    /// Mark placed as the ninth move with no line.
    Draw,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Player,
    phase: Phase,
    p1_wins: u32,
    p2_wins: u32,
}

impl GameState {
    /// Create a fresh match: empty board, player 1 to move, scores at zero.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active: Player::One,
            phase: Phase::InProgress,
            p1_wins: 0,
            p2_wins: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is.
    pub fn active(&self) -> Player {
        self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::One => self.p1_wins,
            Player::Two => self.p2_wins,
        }
    }

    /// Played-cell count for the current round.
    pub fn moves(&self) -> usize {
        self.board.moves()
    }

    /// Apply a click that the input mapper resolved to a board cell.
    ///
    /// After a win or draw the round is frozen: every click is ignored until
    /// [`GameState::reset`]. A winning move bumps the winner's counter.
    pub fn apply_click(&mut self, idx: usize) -> MoveOutcome {
        if self.phase != Phase::InProgress {
            return MoveOutcome::Ignored;
        }
        if !self.board.play(idx, self.active) {
            return MoveOutcome::Ignored;
        }

        if let Some(player) = win::winner(&self.board) {
            self.phase = Phase::Won(player);
            match player {
                Player::One => self.p1_wins += 1,
                Player::Two => self.p2_wins += 1,
            }
            return MoveOutcome::Won(player);
        }

        if self.board.is_full() {
            self.phase = Phase::Draw;
            return MoveOutcome::Draw;
        }

        self.active = self.active.opponent();
        MoveOutcome::Placed
    }

    /// Start a new round. Scores survive; everything else goes back to the
    /// initial state (empty board, player 1 active, zero moves).
    pub fn reset(&mut self) {
        self.board.reset();
        self.active = Player::One;
        self.phase = Phase::InProgress;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
