//! Event mapping from terminal input to game actions.
//!
//! Keys and mouse buttons become [`GameAction`]s here; resolving a click to
//! a board cell goes through [`hit_test`], which scans the same cell rects
//! the view draws.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::core::Board;
use crate::term::layout::GridLayout;
use crate::types::{GameAction, CELL_COUNT};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(GameAction::Quit);
    }
    match key.code {
        KeyCode::Esc => Some(GameAction::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Reset),
        _ => None,
    }
}

/// Map mouse input to game actions.
///
/// Only a left-button press counts; drags, releases, motion, and scrolling
/// are ignored.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<GameAction> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(GameAction::Click {
            x: mouse.column,
            y: mouse.row,
        }),
        _ => None,
    }
}

/// Resolve a click to a playable cell index.
///
/// Linear scan in index order; returns the first cell whose bounding box
/// contains the point (inclusive edges) and is still unplayed. A click on a
/// played cell or outside the grid resolves to `None`, never to an index.
pub fn hit_test(layout: &GridLayout, board: &Board, x: u16, y: u16) -> Option<usize> {
    (0..CELL_COUNT).find(|&idx| layout.cells[idx].contains(x, y) && !board.is_played(idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::layout::Viewport;
    use crate::types::Player;

    fn mouse(kind: MouseEventKind, x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn quit_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(GameAction::Quit)
        );
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(GameAction::Quit)
        );
    }

    #[test]
    fn reset_keys_both_cases() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Reset)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(GameAction::Reset)
        );
    }

    #[test]
    fn unmapped_keys_do_nothing() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn left_press_becomes_click_with_coordinates() {
        let ev = mouse(MouseEventKind::Down(MouseButton::Left), 30, 5);
        assert_eq!(
            handle_mouse_event(ev),
            Some(GameAction::Click { x: 30, y: 5 })
        );
    }

    #[test]
    fn other_mouse_activity_is_ignored() {
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 30, 5)),
            None
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 30, 5)),
            None
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::Moved, 30, 5)),
            None
        );
        assert_eq!(
            handle_mouse_event(mouse(MouseEventKind::ScrollDown, 30, 5)),
            None
        );
    }

    #[test]
    fn hit_test_skips_played_cells() {
        let layout = GridLayout::compute(Viewport::new(80, 24));
        let mut board = Board::new();

        let rect = layout.cells[0];
        assert_eq!(hit_test(&layout, &board, rect.x, rect.y), Some(0));

        board.play(0, Player::One);
        assert_eq!(hit_test(&layout, &board, rect.x, rect.y), None);
    }

    #[test]
    fn hit_test_outside_grid_misses() {
        let layout = GridLayout::compute(Viewport::new(80, 24));
        let board = Board::new();
        // The info panel column is never part of a cell.
        assert_eq!(hit_test(&layout, &board, 1, 1), None);
    }
}
