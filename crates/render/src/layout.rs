// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Chart grid pixel geometry.
//!
//! The 13 cells of a row (or column) are laid out with a `border` pixels gap
//! between them and around the grid, the strip is centered in the requested
//! size and the rounding remainder goes to the end margin:
//!
//! ```text
//!   |start| bd |cell| bd |cell| ... |cell| bd | end |
//!   |<------------------- size ------------------->|
//! ```
use imageproc::rect::Rect;

use crate::{Error, Result};
use holdem_chart_core::GRID_SIZE;

/// The cells geometry along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundaries {
    /// The margin before the grid.
    pub start: u32,
    /// The cell size.
    pub cell: u32,
    /// The margin after the grid.
    pub end: u32,
}

impl Boundaries {
    /// Computes the cells geometry for `size` pixels with a `border` gap.
    ///
    /// Fails with [Error::Layout] if the cell size is less than `min_cell`,
    /// cells are at least one pixel whatever the `min_cell` value.
    pub fn calculate(size: u32, border: u32, min_cell: u32) -> Result<Self> {
        let n = GRID_SIZE as i64;
        let (sz, bd) = (size as i64, border as i64);

        let min = min_cell.max(1);
        let cell = (sz - bd) / n - bd;
        if cell < min as i64 {
            return Err(Error::Layout { size, cell, min });
        }

        let start = (sz - bd - (cell + bd) * n) / 2;
        let end = sz - (cell + bd) * n - start - bd;

        Ok(Self {
            start: start as u32,
            cell: cell as u32,
            end: end as u32,
        })
    }

    /// The size of the grid strip including the outer borders.
    pub fn grid_size(&self, border: u32) -> u32 {
        (self.cell + border) * GRID_SIZE as u32 + border
    }
}

/// The chart grid geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLayout {
    /// The horizontal geometry.
    pub x: Boundaries,
    /// The vertical geometry.
    pub y: Boundaries,
    /// The gap between cells.
    pub border: u32,
}

impl ChartLayout {
    /// Computes the layout for a `width` x `height` grid.
    pub fn new(width: u32, height: u32, border: u32, min_cell: u32) -> Result<Self> {
        Ok(Self {
            x: Boundaries::calculate(width, border, min_cell)?,
            y: Boundaries::calculate(height, border, min_cell)?,
            border,
        })
    }

    /// The cell width.
    pub fn cell_width(&self) -> u32 {
        self.x.cell
    }

    /// The cell height.
    pub fn cell_height(&self) -> u32 {
        self.y.cell
    }

    /// The grid rectangle including the outer borders.
    pub fn grid_rect(&self) -> Rect {
        Rect::at(self.x.start as i32, self.y.start as i32)
            .of_size(self.x.grid_size(self.border), self.y.grid_size(self.border))
    }

    /// The rectangle for the cell at `row` and `col`, the top left corner is at
    /// `(left + bd + (w + bd) * col, top + bd + (h + bd) * row)`.
    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        let bd = self.border;
        let (w, h) = (self.x.cell, self.y.cell);
        let left = self.x.start + bd + (w + bd) * col as u32;
        let top = self.y.start + bd + (h + bd) * row as u32;
        Rect::at(left as i32, top as i32).of_size(w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN_CELL: u32 = 20;

    #[test]
    fn boundaries_512() {
        let b = Boundaries::calculate(512, 5, MIN_CELL).unwrap();
        assert_eq!(b.cell, 507 / 13 - 5);
        assert_eq!(b.start + 13 * (b.cell + 5) + b.end + 5, 512);
    }

    #[test]
    fn boundaries_reconstruct_size() {
        for bd in 3..=5 {
            let min_size = 13 * (MIN_CELL + bd) + bd;
            for size in 300..=4000 {
                match Boundaries::calculate(size, bd, MIN_CELL) {
                    Ok(b) => {
                        assert!(size >= min_size, "size={size} bd={bd}");
                        assert!(b.cell >= MIN_CELL);
                        assert_eq!(b.start + b.grid_size(bd) + b.end, size);
                        assert!(b.end == b.start || b.end == b.start + 1);
                    }
                    Err(Error::Layout { cell, min, .. }) => {
                        assert!(size < min_size, "size={size} bd={bd}");
                        assert!(cell < min as i64);
                    }
                    Err(e) => panic!("Unexpected error {e}"),
                }
            }
        }
    }

    #[test]
    fn boundaries_too_small() {
        let res = Boundaries::calculate(100, 5, MIN_CELL);
        assert!(matches!(
            res,
            Err(Error::Layout {
                size: 100,
                cell: 2,
                min: 20
            })
        ));

        // Smaller than the border.
        assert!(Boundaries::calculate(2, 5, MIN_CELL).is_err());
        assert!(Boundaries::calculate(0, 0, 1).is_err());
    }

    #[test]
    fn boundaries_zero_min_cell() {
        let res = Boundaries::calculate(10, 0, 0);
        assert!(matches!(
            res,
            Err(Error::Layout {
                size: 10,
                cell: 0,
                min: 1
            })
        ));

        let b = Boundaries::calculate(13, 0, 0).unwrap();
        assert_eq!(b.cell, 1);
        assert_eq!(b.start + b.grid_size(0) + b.end, 13);
    }

    #[test]
    fn cell_rects() {
        let layout = ChartLayout::new(512, 400, 3, MIN_CELL).unwrap();
        let bd = 3;
        let (x, y) = (layout.x, layout.y);

        let first = layout.cell_rect(0, 0);
        assert_eq!(first.left(), (x.start + bd) as i32);
        assert_eq!(first.top(), (y.start + bd) as i32);
        assert_eq!(first.width(), x.cell);
        assert_eq!(first.height(), y.cell);

        // Bottom right corner of cell (i, j) is at left + (w + bd) * (j + 1).
        for (i, j) in [(0, 1), (3, 7), (12, 12)] {
            let r = layout.cell_rect(i, j);
            assert_eq!(r.right() + 1, (x.start + (x.cell + bd) * (j as u32 + 1)) as i32);
            assert_eq!(r.bottom() + 1, (y.start + (y.cell + bd) * (i as u32 + 1)) as i32);
        }

        // The last cell ends a border before the grid edge.
        let grid = layout.grid_rect();
        let last = layout.cell_rect(12, 12);
        assert_eq!(grid.right() - last.right(), bd as i32);
        assert_eq!(grid.bottom() - last.bottom(), bd as i32);
        assert_eq!(grid.right() + 1 + x.end as i32, 512);
        assert_eq!(grid.bottom() + 1 + y.end as i32, 400);
    }
}
