//! Simulation core - pure, deterministic, and testable
//!
//! This crate contains the whole Game of Life state and transition logic.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same initial grid produces the same run, always
//! - **Testable**: every rule and wrap case is checkable without a terminal
//! - **Portable**: can run headless, in tests, or behind any display sink
//! - **Allocation-free per step**: the two grid buffers are reused forever
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size toroidal cell storage with neighbor counting
//! - [`simulator`]: double-buffered generation stepping (Conway's rule)
//! - [`rng`]: deterministic LCG seeding for the initial soup
//! - [`error`]: construction-time failures
//!
//! # The Rule
//!
//! Each generation, every cell is evaluated against the committed grid:
//!
//! - A live cell with 2 or 3 live neighbors stays alive.
//! - A dead cell with exactly 3 live neighbors becomes alive.
//! - Every other cell is dead next generation.
//!
//! Neighbors wrap around the grid edges, so the topology is a torus.
//!
//! # Example
//!
//! ```
//! use tui_life_core::{Grid, Simulator};
//! use tui_life_types::CellState;
//!
//! // A vertical blinker on a 5x5 torus.
//! let grid = Grid::new(5, 5, |x, y| {
//!     if x == 1 && (1..=3).contains(&y) {
//!         CellState::Alive
//!     } else {
//!         CellState::Dead
//!     }
//! })
//! .unwrap();
//!
//! let mut sim = Simulator::new(grid);
//! sim.step();
//!
//! // After one step the blinker lies horizontally through (1, 2).
//! assert!(sim.current_state().get(0, 2).is_alive());
//! assert!(sim.current_state().get(1, 2).is_alive());
//! assert!(sim.current_state().get(2, 2).is_alive());
//! assert_eq!(sim.generation(), 1);
//! ```

pub mod error;
pub mod grid;
pub mod rng;
pub mod simulator;

pub use error::ConfigError;
pub use grid::Grid;
pub use rng::{RandomSoup, SimpleRng};
pub use simulator::{transition, Simulator};
