//! The rule of Conway's Game of Life, `B3/S23`.

use crate::{grid::Grid, neighbors::NeighborCounts};

/// Applies the rule to a whole grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transition;

impl Transition {
    /// The state of a cell in the next generation.
    ///
    /// A cell is born with exactly 3 living neighbors,
    /// and survives with 2 or 3.
    #[inline]
    pub fn next_state(alive: bool, count: u8) -> bool {
        count == 3 || (alive && count == 2)
    }

    /// Computes the next generation of `grid`.
    ///
    /// `counts` must be counted from `grid`.
    ///
    /// # Panics
    ///
    /// Panics if `counts` and `grid` have different dimensions.
    pub fn step(grid: &Grid, counts: &NeighborCounts) -> Grid {
        assert!(
            grid.width() == counts.width() && grid.height() == counts.height(),
            "neighbor counts ({} x {}) do not match the grid ({} x {})",
            counts.width(),
            counts.height(),
            grid.width(),
            grid.height()
        );
        let cells = grid
            .cells()
            .iter()
            .zip(counts.counts())
            .map(|(&alive, &count)| Transition::next_state(alive, count))
            .collect::<Box<[bool]>>();
        grid.with_cells(cells)
    }
}
