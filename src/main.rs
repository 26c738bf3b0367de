//! Terminal tic-tac-toe runner.
//!
//! Strictly synchronous: block on the next terminal event, apply it to the
//! game state, redraw, repeat. No timers, no threads.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_tictactoe::core::GameState;
use tui_tictactoe::input::{handle_key_event, handle_mouse_event, hit_test};
use tui_tictactoe::term::{FrameBuffer, GameView, GridLayout, TerminalRenderer, Viewport};
use tui_tictactoe::types::GameAction;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut state = GameState::new();
    let view = GameView;

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut layout = GridLayout::compute(viewport);

    // One framebuffer for the whole session; render and draw_swap reuse it.
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    loop {
        view.render(&mut fb, &state, &layout, viewport);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Press {
                    match handle_key_event(key) {
                        Some(GameAction::Quit) => return Ok(()),
                        Some(GameAction::Reset) => state.reset(),
                        _ => {}
                    }
                }
            }
            Event::Mouse(mouse) => {
                if let Some(GameAction::Click { x, y }) = handle_mouse_event(mouse) {
                    if let Some(idx) = hit_test(&layout, state.board(), x, y) {
                        state.apply_click(idx);
                    }
                }
            }
            Event::Resize(w, h) => {
                viewport = Viewport::new(w, h);
                layout = GridLayout::compute(viewport);
                term.invalidate();
            }
            _ => {}
        }
    }
}
