//! Initial generations.

use crate::{
    error::Error,
    grid::{check_dimension, Grid},
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[cfg(feature = "read-rle")]
use crate::grid::Coord;
#[cfg(feature = "read-rle")]
use ca_formats::{plaintext::Plaintext, rle::Rle};

/// Something that produces the first generation of a simulation.
pub trait SeedProvider {
    /// Produces a `width` × `height` grid.
    fn produce(&mut self, width: usize, height: usize) -> Result<Grid, Error>;
}

/// Every cell is dead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlankSeed;

impl SeedProvider for BlankSeed {
    fn produce(&mut self, width: usize, height: usize) -> Result<Grid, Error> {
        Grid::blank(width, height)
    }
}

/// Every cell is independently alive with probability `fill_rate`.
#[derive(Clone, Debug)]
pub struct RandomSeed {
    rng: ChaCha8Rng,
    fill_rate: f64,
}

impl RandomSeed {
    /// Creates a random seed provider.
    ///
    /// The same `seed` always produces the same grids.
    /// `None` means that the generator is seeded from the system entropy.
    pub fn new(seed: Option<u64>, fill_rate: f64) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&fill_rate) {
            return Err(Error::InvalidFillRate(fill_rate));
        }
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(RandomSeed { rng, fill_rate })
    }

    /// The probability for a cell to be alive.
    pub fn fill_rate(&self) -> f64 {
        self.fill_rate
    }
}

impl SeedProvider for RandomSeed {
    fn produce(&mut self, width: usize, height: usize) -> Result<Grid, Error> {
        let (rng, fill_rate) = (&mut self.rng, self.fill_rate);
        Grid::new(width, height, |_, _| rng.gen_bool(fill_rate))
    }
}

/// A pattern placed at the center of an otherwise dead grid.
///
/// Supports [RLE](https://conwaylife.com/wiki/Rle) and
/// [Plaintext](https://conwaylife.com/wiki/Plaintext).
#[cfg(feature = "read-rle")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternSeed {
    /// Living cells, relative to the top-left corner of the pattern.
    cells: Vec<Coord>,

    /// Width of the bounding box.
    width: usize,

    /// Height of the bounding box.
    height: usize,
}

#[cfg(feature = "read-rle")]
impl PatternSeed {
    /// Parses a pattern.
    ///
    /// The text is read as RLE if it has a header line (`x = ..., y = ...`),
    /// and as Plaintext otherwise.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let is_rle = text.lines().any(|line| {
            let line = line.trim_start();
            line.starts_with('x') && line.contains('=')
        });
        let positions = if is_rle {
            Rle::new(text)
                .map_err(parse_error)?
                .filter_map(|cell| match cell {
                    Ok(cell) if cell.state == 0 => None,
                    Ok(cell) => Some(Ok(cell.position)),
                    Err(e) => Some(Err(parse_error(e))),
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            Plaintext::new(text)
                .map_err(parse_error)?
                .collect::<Result<Vec<_>, _>>()
                .map_err(parse_error)?
        };
        Ok(PatternSeed::from_positions(&positions))
    }

    fn from_positions(positions: &[(i64, i64)]) -> Self {
        let (Some(min_x), Some(min_y)) = (
            positions.iter().map(|p| p.0).min(),
            positions.iter().map(|p| p.1).min(),
        ) else {
            return PatternSeed {
                cells: Vec::new(),
                width: 0,
                height: 0,
            };
        };
        let cells: Vec<Coord> = positions
            .iter()
            .map(|&(x, y)| ((y - min_y) as usize, (x - min_x) as usize))
            .collect();
        let width = cells.iter().map(|c| c.1 + 1).max().unwrap_or(0);
        let height = cells.iter().map(|c| c.0 + 1).max().unwrap_or(0);
        PatternSeed {
            cells,
            width,
            height,
        }
    }

    /// Width of the bounding box of the living cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the bounding box of the living cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(feature = "read-rle")]
fn parse_error<E: std::fmt::Display>(e: E) -> Error {
    Error::ParsePattern(e.to_string())
}

#[cfg(feature = "read-rle")]
impl SeedProvider for PatternSeed {
    fn produce(&mut self, width: usize, height: usize) -> Result<Grid, Error> {
        let size = check_dimension(width, height)?;
        if self.width > width || self.height > height {
            return Err(Error::PatternTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        let row_offset = (height - self.height) / 2;
        let col_offset = (width - self.width) / 2;
        let mut cells = vec![false; size];
        for &(row, col) in &self.cells {
            cells[(row + row_offset) * width + col + col_offset] = true;
        }
        Grid::from_cells(width, height, cells)
    }
}
