//! Simulation configuration.

use crate::{
    boundary::Boundary,
    error::Error,
    seed::{RandomSeed, SeedProvider},
    simulation::Simulation,
};
use educe::Educe;
use log::debug;

#[cfg(feature = "read-rle")]
use crate::seed::PatternSeed;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Simulation configuration.
///
/// The first generation and the simulation will be generated from this configuration.
///
/// Missing fields take their default values when deserializing.
#[derive(Clone, Debug, Educe, PartialEq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Config {
    /// Width.
    #[educe(Default = 40)]
    pub width: i32,

    /// Height.
    #[educe(Default = 30)]
    pub height: i32,

    /// What happens at the edges of the grid.
    pub boundary: Boundary,

    /// The probability for a cell in the first generation to be alive.
    ///
    /// Ignored when a [`pattern`](#structfield.pattern) is given.
    #[educe(Default = 0.5)]
    pub fill_rate: f64,

    /// Seed of the random number generator.
    ///
    /// `None` means that the seed is chosen randomly.
    pub seed: Option<u64>,

    /// A pattern in RLE or Plaintext format, placed at the center of
    /// an otherwise dead first generation.
    ///
    /// Requires the `read-rle` feature.
    pub pattern: Option<String>,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(width: i32, height: i32) -> Self {
        Config {
            width,
            height,
            ..Config::default()
        }
    }

    /// Sets the boundary policy.
    pub fn set_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Sets the fill rate of the first generation.
    pub fn set_fill_rate(mut self, fill_rate: f64) -> Self {
        self.fill_rate = fill_rate;
        self
    }

    /// Sets the seed of the random number generator.
    pub fn set_seed<T: Into<Option<u64>>>(mut self, seed: T) -> Self {
        self.seed = seed.into();
        self
    }

    /// Sets the pattern of the first generation.
    pub fn set_pattern<T: Into<Option<String>>>(mut self, pattern: T) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Checks the width and the height, and returns them as `usize`.
    pub fn dimensions(&self) -> Result<(usize, usize), Error> {
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::InvalidDimension {
                width: self.width.into(),
                height: self.height.into(),
            });
        }
        Ok((self.width as usize, self.height as usize))
    }

    /// The provider of the first generation.
    pub fn seed_provider(&self) -> Result<Box<dyn SeedProvider>, Error> {
        match &self.pattern {
            #[cfg(feature = "read-rle")]
            Some(pattern) => Ok(Box::new(PatternSeed::parse(pattern)?)),
            #[cfg(not(feature = "read-rle"))]
            Some(_) => Err(Error::ParsePattern(String::from(
                "reading patterns requires the `read-rle` feature",
            ))),
            None => Ok(Box::new(RandomSeed::new(self.seed, self.fill_rate)?)),
        }
    }

    /// Creates a new simulation from the configuration.
    ///
    /// Returns an error if the size, the fill rate or the pattern is invalid.
    pub fn simulation(&self) -> Result<Simulation, Error> {
        let (width, height) = self.dimensions()?;
        let seed = self.seed_provider()?.produce(width, height)?;
        debug!(
            "first generation: {} x {}, {} living cells",
            width,
            height,
            seed.population()
        );
        Ok(Simulation::with_boundary(seed, self.boundary))
    }
}
