//! Mouse-driven two-player tic-tac-toe for the terminal.
//!
//! `core` holds the pure game rules, `term` the layout and rendering layers,
//! `input` the event mapping, and `types` the shared data types. The binary
//! in `main.rs` ties them together in a single blocking event loop.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
