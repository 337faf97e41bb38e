//! Grids.

use crate::error::Error;
use std::fmt::{self, Debug, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The coordinates of a cell.
///
/// `(row, column)`. Both coordinates are 0-indexed.
pub type Coord = (usize, usize);

/// The largest number of cells a grid may have.
pub const MAX_CELLS: usize = 1 << 28;

/// One generation of the cellular automaton.
///
/// A `width` × `height` field of cells, stored row by row in a flat slice.
/// `true` means alive.
///
/// A grid never changes after its creation. Each generation is a new grid.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(into = "GridSer", try_from = "GridSer")
)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Box<[bool]>,
}

impl Grid {
    /// Creates a new grid, calling `init(row, col)` once for every cell,
    /// row by row.
    ///
    /// Returns an error if the width or the height is zero,
    /// or if there would be more than [`MAX_CELLS`] cells.
    pub fn new<F>(width: usize, height: usize, mut init: F) -> Result<Self, Error>
    where
        F: FnMut(usize, usize) -> bool,
    {
        let size = check_dimension(width, height)?;
        let mut cells = Vec::with_capacity(size);
        for row in 0..height {
            for col in 0..width {
                cells.push(init(row, col));
            }
        }
        Ok(Grid {
            width,
            height,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Creates a grid where every cell is dead.
    pub fn blank(width: usize, height: usize) -> Result<Self, Error> {
        Grid::new(width, height, |_, _| false)
    }

    /// Creates a grid from a row-major vector of cells.
    pub fn from_cells(width: usize, height: usize, cells: Vec<bool>) -> Result<Self, Error> {
        let size = check_dimension(width, height)?;
        if cells.len() != size {
            return Err(Error::CellCountMismatch {
                expected: size,
                found: cells.len(),
            });
        }
        Ok(Grid {
            width,
            height,
            cells: cells.into_boxed_slice(),
        })
    }

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

    /// Gets the state of the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        match self.checked_get(row, col) {
            Some(state) => state,
            None => panic!(
                "OutOfBounds: cell ({}, {}) is outside the {} x {} grid",
                row, col, self.width, self.height
            ),
        }
    }

    /// Gets the state of the cell at `(row, col)`,
    /// or `None` if there is no such cell.
    #[inline]
    pub fn checked_get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Whether every cell is dead.
    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Iterates over the rows, from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.width)
    }

    /// Iterates over the coordinates of living cells, row by row.
    pub fn alive_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &alive)| alive)
            .map(move |(i, _)| (i / width, i % width))
    }

    /// The cells as a row-major slice.
    pub(crate) fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// A grid with the same dimensions and the given cells.
    pub(crate) fn with_cells(&self, cells: Box<[bool]>) -> Grid {
        debug_assert_eq!(cells.len(), self.cells.len());
        Grid {
            width: self.width,
            height: self.height,
            cells,
        }
    }
}

/// Checks the dimensions and returns the number of cells.
pub(crate) fn check_dimension(width: usize, height: usize) -> Result<usize, Error> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension {
            width: width.try_into().unwrap_or(i64::MAX),
            height: height.try_into().unwrap_or(i64::MAX),
        });
    }
    match width.checked_mul(height) {
        Some(size) if size <= MAX_CELLS => Ok(size),
        _ => Err(Error::TooManyCells { width, height }),
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {} x {}", self.width, self.height)?;
        for row in self.rows() {
            for &alive in row {
                f.write_str(if alive { "o" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A representation of a [`Grid`] which can be easily serialized.
///
/// Each row is a [Plaintext](https://conwaylife.com/wiki/Plaintext) line:
/// `o` for living cells, `.` for dead cells.
#[cfg(feature = "serde")]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct GridSer {
    width: usize,
    height: usize,
    rows: Vec<String>,
}

#[cfg(feature = "serde")]
impl From<Grid> for GridSer {
    fn from(grid: Grid) -> Self {
        GridSer {
            width: grid.width,
            height: grid.height,
            rows: grid
                .rows()
                .map(|row| row.iter().map(|&alive| if alive { 'o' } else { '.' }).collect())
                .collect(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<GridSer> for Grid {
    type Error = Error;

    fn try_from(ser: GridSer) -> Result<Self, Self::Error> {
        if ser.rows.len() != ser.height {
            return Err(Error::ParsePattern(format!(
                "{} rows instead of {}",
                ser.rows.len(),
                ser.height
            )));
        }
        let size = check_dimension(ser.width, ser.height)?;
        let mut cells = Vec::with_capacity(size);
        for (row, line) in ser.rows.iter().enumerate() {
            let len = line.chars().count();
            if len != ser.width {
                return Err(Error::ParsePattern(format!(
                    "row {} has {} cells instead of {}",
                    row, len, ser.width
                )));
            }
            for c in line.chars() {
                match c {
                    'o' | 'O' | '*' => cells.push(true),
                    '.' => cells.push(false),
                    _ => {
                        return Err(Error::ParsePattern(format!(
                            "unexpected character {:?} in row {}",
                            c, row
                        )))
                    }
                }
            }
        }
        Grid::from_cells(ser.width, ser.height, cells)
    }
}
