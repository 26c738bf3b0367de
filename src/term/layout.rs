//! Grid layout calculator - terminal size to cell geometry
//!
//! Pure geometry (no I/O): given a viewport, reserve the left quarter for the
//! info panel, fit the largest square into what remains, split it into three
//! spacing units, and hand out the bounding box of each of the 9 cells. Both
//! the view (drawing) and the input mapper (hit testing) read the same
//! layout, so what you see is what you can click.

use crate::types::{CELL_COUNT, GRID_DIM};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Bounding box of one board cell, in terminal coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellRect {
    pub x: u16,
    pub y: u16,
    pub side: u16,
}

impl CellRect {
    /// Containment test with inclusive bounds on all four edges.
    ///
    /// This is the single click-boundary policy for the whole program; the
    /// input mapper has no containment logic of its own.
    pub fn contains(&self, px: u16, py: u16) -> bool {
        px >= self.x && px <= self.x + self.side && py >= self.y && py <= self.y + self.side
    }
}

/// Computed geometry for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Leftmost column of the grid square.
    pub origin_x: u16,
    /// Side of the grid square in terminal cells.
    pub side: u16,
    /// One third of the square, rounded.
    pub spacing: u16,
    /// Columns of the two internal vertical divider lines.
    pub v_lines: [u16; 2],
    /// Rows of the two internal horizontal divider lines.
    pub h_lines: [u16; 2],
    /// Bounding boxes of the 9 cells, index = row * 3 + col.
    pub cells: [CellRect; CELL_COUNT],
}

impl GridLayout {
    /// Compute the grid for a terminal size.
    ///
    /// Rounding may leave the last row and column's clickable area off by one
    /// terminal cell; that imprecision is cosmetic and accepted. Degenerate
    /// viewports still produce a layout (possibly with zero-sized cells)
    /// rather than an error.
    pub fn compute(viewport: Viewport) -> Self {
        let panel_w = viewport.width / 4;
        let side = viewport.height.min(viewport.width.saturating_sub(panel_w));
        let origin_x = viewport.width / 3;
        let spacing = ((side as f64) / 3.0).round() as u16;

        let v_lines = [origin_x + spacing, origin_x + spacing * 2];
        let h_lines = [spacing, spacing * 2];

        let cell_side = spacing.saturating_sub(2);
        let mut cells = [CellRect::default(); CELL_COUNT];
        for row in 0..GRID_DIM {
            for col in 0..GRID_DIM {
                let r = row as u16;
                let c = col as u16;
                cells[row * GRID_DIM + col] = CellRect {
                    x: origin_x + c * spacing + 1,
                    // Row 0 starts at the top edge; lower rows start one
                    // cell below their divider line.
                    y: r * spacing + u16::from(r > 0),
                    side: cell_side,
                };
            }
        }

        Self {
            origin_x,
            side,
            spacing,
            v_lines,
            h_lines,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_terminal_produces_nine_distinct_cells() {
        let layout = GridLayout::compute(Viewport::new(80, 24));
        for i in 0..CELL_COUNT {
            for j in (i + 1)..CELL_COUNT {
                assert_ne!(layout.cells[i], layout.cells[j]);
            }
        }
    }

    #[test]
    fn cells_sit_between_divider_lines() {
        let layout = GridLayout::compute(Viewport::new(80, 24));
        // Column 1 cells start right of the first vertical divider.
        assert_eq!(layout.cells[1].x, layout.v_lines[0] + 1);
        // Row 1 cells start below the first horizontal divider.
        assert_eq!(layout.cells[3].y, layout.h_lines[0] + 1);
    }

    #[test]
    fn containment_is_inclusive_on_all_edges() {
        let rect = CellRect { x: 10, y: 2, side: 5 };
        assert!(rect.contains(10, 2));
        assert!(rect.contains(15, 7));
        assert!(rect.contains(12, 4));
        assert!(!rect.contains(9, 4));
        assert!(!rect.contains(16, 4));
        assert!(!rect.contains(12, 8));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let layout = GridLayout::compute(Viewport::new(3, 2));
        assert!(layout.spacing <= 1);
    }
}
