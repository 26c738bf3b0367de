//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: pure geometry (`layout`) and a
//! pure view (`game_view`) produce a framebuffer (`fb`) that a crossterm
//! backend (`renderer`) flushes to the terminal. Only `renderer` performs
//! I/O, so everything else is unit-testable.

pub mod fb;
pub mod game_view;
pub mod layout;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::GameView;
pub use layout::{CellRect, GridLayout, Viewport};
pub use renderer::TerminalRenderer;
