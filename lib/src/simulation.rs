//! Running the cellular automaton generation by generation.

use crate::{
    boundary::Boundary, grid::Grid, neighbors::NeighborCounter, transition::Transition,
};
use log::trace;

/// A running simulation.
///
/// Owns the current generation and its index. Generation `0` is the seed.
#[derive(Clone, Debug)]
pub struct Simulation {
    /// The current generation.
    current: Grid,

    /// The index of the current generation.
    generation: u64,

    /// Counts neighbors under the chosen boundary policy.
    counter: NeighborCounter,

    /// Whether the last step left the grid unchanged.
    still: bool,
}

impl Simulation {
    /// Starts a simulation from `seed`, with [`Boundary::Clipped`].
    pub fn new(seed: Grid) -> Self {
        Simulation::with_boundary(seed, Boundary::Clipped)
    }

    /// Starts a simulation from `seed`, with the given boundary policy.
    pub fn with_boundary(seed: Grid, boundary: Boundary) -> Self {
        Simulation {
            current: seed,
            generation: 0,
            counter: NeighborCounter::new(boundary),
            still: false,
        }
    }

    /// The current generation.
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// The index of the current generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The boundary policy.
    pub fn boundary(&self) -> Boundary {
        self.counter.boundary()
    }

    /// Whether the last [`advance`](Self::advance) produced the same grid
    /// as the one before it.
    ///
    /// Always `false` before the first step.
    pub fn is_still(&self) -> bool {
        self.still
    }

    /// Computes the next generation, makes it current, and returns it.
    pub fn advance(&mut self) -> &Grid {
        let counts = self.counter.count(&self.current);
        let next = Transition::step(&self.current, &counts);
        self.still = next == self.current;
        self.current = next;
        self.generation += 1;
        trace!(
            "generation {}: {} living cells",
            self.generation,
            self.current.population()
        );
        &self.current
    }

    /// Turns the simulation into an endless iterator over generations,
    /// starting with the current one.
    pub fn generations(self) -> Generations {
        Generations {
            simulation: self,
            started: false,
        }
    }
}

/// An endless iterator over the generations of a [`Simulation`].
///
/// Created by [`Simulation::generations`].
#[derive(Clone, Debug)]
pub struct Generations {
    simulation: Simulation,
    started: bool,
}

impl Generations {
    /// The underlying simulation.
    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }
}

impl Iterator for Generations {
    type Item = Grid;

    fn next(&mut self) -> Option<Self::Item> {
        if self.started {
            Some(self.simulation.advance().clone())
        } else {
            self.started = true;
            Some(self.simulation.current().clone())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
