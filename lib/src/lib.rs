//! __Rlife__ runs [Conway's Game of Life](https://conwaylife.com/wiki/Conway%27s_Game_of_Life)
//! on a bounded grid.
//!
//! Every step counts the living neighbors of each cell under a [`Boundary`] policy,
//! then applies the rule `B3/S23` to all cells at once.
//!
//! # Example
//!
//! ```rust
//! use rlife_lib::{Grid, Simulation};
//!
//! // A blinker.
//! let seed = Grid::new(5, 5, |row, col| row == 2 && (1..=3).contains(&col)).unwrap();
//! let mut simulation = Simulation::new(seed.clone());
//!
//! let vertical = simulation.advance().clone();
//! assert!(vertical.get(1, 2) && vertical.get(2, 2) && vertical.get(3, 2));
//! assert_eq!(simulation.advance(), &seed);
//! assert_eq!(simulation.generation(), 2);
//! ```

mod boundary;
mod config;
mod error;
mod grid;
mod neighbors;
mod render;
mod seed;
mod simulation;
mod transition;

pub use boundary::Boundary;
pub use config::Config;
pub use error::Error;
pub use grid::{Coord, Grid, MAX_CELLS};
pub use neighbors::{NeighborCounter, NeighborCounts};
pub use render::{GlyphRenderer, Renderer, RleRenderer};
#[cfg(feature = "read-rle")]
pub use seed::PatternSeed;
pub use seed::{BlankSeed, RandomSeed, SeedProvider};
pub use simulation::{Generations, Simulation};
pub use transition::Transition;
