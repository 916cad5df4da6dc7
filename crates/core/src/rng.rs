//! RNG module - deterministic seeding for the initial soup
//!
//! A small LCG keeps initial-state generation reproducible: the same seed
//! always produces the same soup, which tests and benchmarks rely on. The
//! simulator itself never draws randomness; only the initial grid does.

use tui_life_types::CellState;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Per-coordinate seed source for the initial grid.
///
/// Each cell independently comes up alive with probability
/// `1 / alive_one_in`. Feed [`RandomSoup::sample`] to a grid initializer:
///
/// ```
/// use tui_life_core::{Grid, RandomSoup};
///
/// let mut soup = RandomSoup::new(42, 11);
/// let grid = Grid::new(20, 10, |_, _| soup.sample()).unwrap();
/// assert!(grid.population() < 200);
/// ```
#[derive(Debug, Clone)]
pub struct RandomSoup {
    rng: SimpleRng,
    alive_one_in: u32,
}

impl RandomSoup {
    /// `alive_one_in` below 1 is coerced to 1 (every cell alive).
    pub fn new(seed: u32, alive_one_in: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            alive_one_in: alive_one_in.max(1),
        }
    }

    /// Draw the state for the next cell.
    pub fn sample(&mut self) -> CellState {
        if self.rng.next_range(self.alive_one_in) == 0 {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}
