//! Terminal input module.
//!
//! Maps crossterm key and mouse events into [`crate::types::GameAction`]
//! and resolves clicks against the grid layout.

pub mod map;

pub use map::{handle_key_event, handle_mouse_event, hit_test};
