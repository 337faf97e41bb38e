//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum Error {
    /// Width and height should be positive, got {width} x {height}.
    InvalidDimension { width: i64, height: i64 },
    /// A {width} x {height} grid has too many cells.
    TooManyCells { width: usize, height: usize },
    /// Expected {expected} cells, found {found}.
    CellCountMismatch { expected: usize, found: usize },
    /// Fill rate should be between 0 and 1, got {0}.
    InvalidFillRate(f64),
    /// The pattern ({width} x {height}) does not fit in the grid.
    PatternTooLarge { width: usize, height: usize },
    /// Invalid pattern: {0}.
    ParsePattern(String),
}
