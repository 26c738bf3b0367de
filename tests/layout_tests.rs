//! Grid layout tests - geometry and click containment

use tui_tictactoe::term::{GridLayout, Viewport};
use tui_tictactoe::types::{CELL_COUNT, GRID_DIM};

const VP: Viewport = Viewport {
    width: 80,
    height: 24,
};

#[test]
fn test_reserves_left_quarter_for_panel() {
    let layout = GridLayout::compute(VP);
    // The square fits in the width left after the panel margin.
    assert!(layout.side <= VP.width - VP.width / 4);
    assert!(layout.side <= VP.height);
    // No cell reaches into the panel area.
    for rect in layout.cells {
        assert!(rect.x > VP.width / 4);
    }
}

#[test]
fn test_spacing_is_rounded_third_of_side() {
    let layout = GridLayout::compute(VP);
    let expected = ((layout.side as f64) / 3.0).round() as u16;
    assert_eq!(layout.spacing, expected);
}

#[test]
fn test_divider_lines_at_spacing_multiples() {
    let layout = GridLayout::compute(VP);
    assert_eq!(layout.v_lines[0], layout.origin_x + layout.spacing);
    assert_eq!(layout.v_lines[1], layout.origin_x + 2 * layout.spacing);
    assert_eq!(layout.h_lines[0], layout.spacing);
    assert_eq!(layout.h_lines[1], 2 * layout.spacing);
}

#[test]
fn test_cells_clear_of_divider_lines() {
    let layout = GridLayout::compute(VP);
    for rect in layout.cells {
        for &vx in &layout.v_lines {
            assert!(
                rect.x + rect.side < vx || rect.x > vx,
                "cell at x={} spans vertical divider {}",
                rect.x,
                vx
            );
        }
        for &hy in &layout.h_lines {
            assert!(
                rect.y + rect.side < hy || rect.y > hy,
                "cell at y={} spans horizontal divider {}",
                rect.y,
                hy
            );
        }
    }
}

#[test]
fn test_cells_do_not_overlap() {
    let layout = GridLayout::compute(VP);
    for i in 0..CELL_COUNT {
        for j in (i + 1)..CELL_COUNT {
            let a = layout.cells[i];
            let b = layout.cells[j];
            let disjoint_x = a.x + a.side < b.x || b.x + b.side < a.x;
            let disjoint_y = a.y + a.side < b.y || b.y + b.side < a.y;
            assert!(
                disjoint_x || disjoint_y,
                "cells {} and {} overlap",
                i,
                j
            );
        }
    }
}

#[test]
fn test_row_major_cell_order() {
    let layout = GridLayout::compute(VP);
    for row in 0..GRID_DIM {
        for col in 0..GRID_DIM {
            let rect = layout.cells[row * GRID_DIM + col];
            if col > 0 {
                assert!(rect.x > layout.cells[row * GRID_DIM + col - 1].x);
            }
            if row > 0 {
                assert!(rect.y > layout.cells[(row - 1) * GRID_DIM + col].y);
            }
        }
    }
}

#[test]
fn test_corner_points_are_contained_inclusively() {
    let layout = GridLayout::compute(VP);
    for rect in layout.cells {
        assert!(rect.contains(rect.x, rect.y));
        assert!(rect.contains(rect.x + rect.side, rect.y));
        assert!(rect.contains(rect.x, rect.y + rect.side));
        assert!(rect.contains(rect.x + rect.side, rect.y + rect.side));
        if rect.x > 0 {
            assert!(!rect.contains(rect.x - 1, rect.y));
        }
        assert!(!rect.contains(rect.x + rect.side + 1, rect.y));
    }
}

#[test]
fn test_wide_and_tall_terminals() {
    // Wide: height limits the square.
    let wide = GridLayout::compute(Viewport::new(200, 30));
    assert_eq!(wide.side, 30);

    // Tall: remaining width limits the square.
    let tall = GridLayout::compute(Viewport::new(40, 100));
    assert_eq!(tall.side, 40 - 40 / 4);
}

#[test]
fn test_degenerate_viewport_is_total() {
    // No panic, whatever the size.
    for (w, h) in [(0, 0), (1, 1), (5, 3), (3, 80)] {
        let layout = GridLayout::compute(Viewport::new(w, h));
        assert_eq!(layout.cells.len(), CELL_COUNT);
    }
}
