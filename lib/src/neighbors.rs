//! Counting living neighbors.

use crate::{boundary::Boundary, grid::Grid};
use std::fmt::{self, Debug, Formatter};

/// Offsets `(d_row, d_col)` of the eight cells in the neighborhood.
const NBHD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The number of living neighbors of every cell in a grid.
///
/// Has the same dimensions as the grid it was counted from.
/// Every count is between `0` and `8`.
#[derive(Clone, PartialEq, Eq)]
pub struct NeighborCounts {
    width: usize,
    height: usize,
    counts: Box<[u8]>,
}

impl NeighborCounts {
    /// Width.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Gets the number of living neighbors of the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(
            row < self.height && col < self.width,
            "OutOfBounds: cell ({}, {}) is outside the {} x {} grid",
            row,
            col,
            self.width,
            self.height
        );
        self.counts[row * self.width + col]
    }

    /// The counts as a row-major slice.
    pub(crate) fn counts(&self) -> &[u8] {
        &self.counts
    }
}

impl Debug for NeighborCounts {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "NeighborCounts {} x {}", self.width, self.height)?;
        for row in self.counts.chunks_exact(self.width) {
            for count in row {
                write!(f, "{}", count)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Counts living neighbors under a fixed [`Boundary`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NeighborCounter {
    boundary: Boundary,
}

impl NeighborCounter {
    /// Creates a counter with the given boundary policy.
    pub fn new(boundary: Boundary) -> Self {
        NeighborCounter { boundary }
    }

    /// The boundary policy.
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Counts the living neighbors of every cell of `grid`.
    ///
    /// Only reads `grid`, so every count comes from the same generation.
    pub fn count(&self, grid: &Grid) -> NeighborCounts {
        let (width, height) = (grid.width(), grid.height());
        let mut counts = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                let count = NBHD
                    .iter()
                    .filter_map(|&(d_row, d_col)| self.neighbor(grid, row, col, d_row, d_col))
                    .filter(|&(r, c)| grid.get(r, c))
                    .count();
                counts.push(count as u8);
            }
        }
        NeighborCounts {
            width,
            height,
            counts: counts.into_boxed_slice(),
        }
    }

    /// The coordinates of the neighbor at the given offset,
    /// or `None` if it is cut off by the boundary.
    #[inline]
    fn neighbor(
        &self,
        grid: &Grid,
        row: usize,
        col: usize,
        d_row: isize,
        d_col: isize,
    ) -> Option<(usize, usize)> {
        match self.boundary {
            Boundary::Clipped => {
                let r = row.checked_add_signed(d_row)?;
                let c = col.checked_add_signed(d_col)?;
                if r < grid.height() && c < grid.width() {
                    Some((r, c))
                } else {
                    None
                }
            }
            Boundary::Torus => {
                let r = (row as isize + d_row).rem_euclid(grid.height() as isize);
                let c = (col as isize + d_col).rem_euclid(grid.width() as isize);
                Some((r as usize, c as usize))
            }
        }
    }
}
