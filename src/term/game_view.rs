//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crossterm::style::Color;

use crate::core::{GameState, Phase};
use crate::term::fb::{CellStyle, FrameBuffer};
use crate::term::layout::{GridLayout, Viewport};
use crate::types::{Player, CELL_COUNT};

/// Renders the board, the info panel, and end-of-round banners.
pub struct GameView;

impl GameView {
    /// Render the current game state into a caller-owned framebuffer.
    ///
    /// The buffer is resized to the viewport and cleared first, so callers
    /// can keep one buffer alive across frames (and across resizes) instead
    /// of allocating per frame.
    pub fn render(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        layout: &GridLayout,
        viewport: Viewport,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        self.draw_grid(fb, layout);
        self.draw_marks(fb, state, layout);
        self.draw_panel(fb, state, viewport);
        self.draw_banner(fb, state, viewport);
    }

    /// Divider glyphs along the two internal vertical and horizontal lines,
    /// with a crossing glyph where they meet.
    fn draw_grid(&self, fb: &mut FrameBuffer, layout: &GridLayout) {
        let style = CellStyle::default();

        for &vx in &layout.v_lines {
            for row in 0..=layout.side {
                fb.put_char(vx, row, '│', style);
            }
        }
        for &hy in &layout.h_lines {
            for col in (layout.origin_x + 1)..=(layout.origin_x + layout.side) {
                fb.put_char(col, hy, '─', style);
            }
        }
        for &vx in &layout.v_lines {
            for &hy in &layout.h_lines {
                fb.put_char(vx, hy, '┼', style);
            }
        }
    }

    /// Fill each played cell's bounding box with the owner's glyph.
    ///
    /// Both players render the same way (glyph fill); the bounds are the
    /// same inclusive rects the input mapper hit-tests against.
    fn draw_marks(&self, fb: &mut FrameBuffer, state: &GameState, layout: &GridLayout) {
        for idx in 0..CELL_COUNT {
            let Some(player) = state.board().get(idx) else {
                continue;
            };
            let rect = layout.cells[idx];
            fb.fill_rect(
                rect.x,
                rect.y,
                rect.side + 1,
                rect.side + 1,
                player.glyph(),
                mark_style(player),
            );
        }
    }

    /// Left margin: whose turn, win counters, key hints.
    fn draw_panel(&self, fb: &mut FrameBuffer, state: &GameState, viewport: Viewport) {
        let style = CellStyle::default();

        let turn = match state.phase() {
            Phase::InProgress => format!("{}'s Turn", state.active().label()),
            Phase::Won(_) | Phase::Draw => "R for next round".to_string(),
        };
        fb.put_str(1, 1, &turn, style);

        fb.put_str(
            1,
            3,
            &format!("P1 Wins: {}", state.wins(Player::One)),
            style,
        );
        fb.put_str(
            1,
            5,
            &format!("P2 Wins: {}", state.wins(Player::Two)),
            style,
        );

        // The hints sit on the bottom two rows; below 8 rows they would
        // collide with the turn and score lines, so they are dropped.
        let h = viewport.height;
        if h >= 8 {
            fb.put_str(1, h - 2, "R to reset", style);
            fb.put_str(1, h - 1, "ESC to exit", style);
        }
    }

    /// Centered badge over the middle of the screen on win or draw.
    fn draw_banner(&self, fb: &mut FrameBuffer, state: &GameState, viewport: Viewport) {
        let (text, style) = match state.phase() {
            Phase::InProgress => return,
            Phase::Won(Player::One) => (
                "Player 1 Wins!",
                CellStyle::new(Color::Black, Color::DarkBlue),
            ),
            Phase::Won(Player::Two) => ("Player 2 Wins!", CellStyle::new(Color::Black, Color::Red)),
            Phase::Draw => ("Draw!", CellStyle::new(Color::Black, Color::Green)),
        };

        let text_w = text.chars().count() as u16;
        let x = viewport.width.saturating_sub(text_w) / 2;
        let y = viewport.height / 2;
        fb.put_str(x, y, text, style);
    }
}

fn mark_style(player: Player) -> CellStyle {
    match player {
        Player::One => CellStyle::new(Color::DarkBlue, Color::Black).bold(),
        Player::Two => CellStyle::new(Color::Red, Color::Black).bold(),
    }
}
