//! Simulator module - advances the grid one generation at a time
//!
//! The simulator owns two same-size grids. During a step, every read hits the
//! committed buffer and every write lands in the scratch buffer; the two are
//! swapped once the full scan finishes. That swap is the only point where a
//! new generation becomes observable, so rule evaluation can never see a
//! partially updated neighborhood.

use std::mem;

use tui_life_types::CellState;

use crate::error::ConfigError;
use crate::grid::Grid;

/// Conway's transition rule for a single cell.
///
/// Live cells survive with 2 or 3 live neighbors; dead cells with exactly 3
/// live neighbors are born; every other cell is dead next generation.
pub fn transition(state: CellState, live_neighbors: u8) -> CellState {
    match (state, live_neighbors) {
        (CellState::Alive, 2 | 3) => CellState::Alive,
        (CellState::Dead, 3) => CellState::Alive,
        _ => CellState::Dead,
    }
}

/// Double-buffered Game of Life stepper.
#[derive(Debug, Clone)]
pub struct Simulator {
    current: Grid,
    next: Grid,
    generation: u64,
}

impl Simulator {
    /// Take ownership of `initial` as the committed state and allocate a
    /// same-size scratch buffer (contents irrelevant, fully overwritten on
    /// the first step).
    pub fn new(initial: Grid) -> Self {
        let next = initial.blank_like();
        Self {
            current: initial,
            next,
            generation: 0,
        }
    }

    /// Use a caller-supplied scratch buffer instead of allocating one.
    pub fn with_buffers(current: Grid, next: Grid) -> Result<Self, ConfigError> {
        if current.width() != next.width() || current.height() != next.height() {
            return Err(ConfigError::SizeMismatch {
                current_width: current.width(),
                current_height: current.height(),
                next_width: next.width(),
                next_height: next.height(),
            });
        }
        Ok(Self {
            current,
            next,
            generation: 0,
        })
    }

    /// Advance exactly one generation.
    ///
    /// Infallible and total: scans the whole grid, applies the rule against
    /// the committed buffer, then publishes the result with a buffer swap.
    pub fn step(&mut self) {
        for y in 0..self.current.height() {
            for x in 0..self.current.width() {
                let live = self.current.count_live_neighbors(x, y);
                self.next.set(x, y, transition(self.current.get(x, y), live));
            }
        }
        mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    /// Read-only view of the committed generation.
    ///
    /// Never exposes the scratch buffer.
    pub fn current_state(&self) -> &Grid {
        &self.current
    }

    /// Completed steps since construction or the last reseed.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn width(&self) -> usize {
        self.current.width()
    }

    pub fn height(&self) -> usize {
        self.current.height()
    }

    /// Refill the committed buffer from a fresh initializer and restart the
    /// generation count. Buffer sizes are untouched.
    pub fn reseed(&mut self, mut initializer: impl FnMut(usize, usize) -> CellState) {
        for y in 0..self.current.height() {
            for x in 0..self.current.width() {
                self.current.set(x, y, initializer(x, y));
            }
        }
        self.generation = 0;
    }
}
