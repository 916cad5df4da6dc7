//! Grid module - cell storage on a fixed torus
//!
//! Cells live in a flat array, row-major (`y * width + x`), for O(1)
//! bounds-checked access without hashing. Wraparound is applied in exactly
//! one place, [`Grid::count_live_neighbors`]; `get` and `set` require
//! in-range coordinates and treat anything else as a caller bug.

use tui_life_types::CellState;

use crate::error::ConfigError;

/// The 8 Moore-neighborhood offsets.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Fixed-size toroidal cell grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat cell storage, row-major (`y * width + x`).
    cells: Vec<CellState>,
}

impl Grid {
    /// Build a grid, filling each cell from `initializer(x, y)`.
    ///
    /// The initializer runs exactly once per coordinate, in row-major order.
    pub fn new(
        width: usize,
        height: usize,
        mut initializer: impl FnMut(usize, usize) -> CellState,
    ) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroDimension { width, height });
        }

        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(initializer(x, y));
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// All-dead grid of the given size.
    pub fn dead(width: usize, height: usize) -> Result<Self, ConfigError> {
        Self::new(width, height, |_, _| CellState::Dead)
    }

    /// All-dead grid with the same dimensions as `self`.
    pub fn blank_like(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: vec![CellState::Dead; self.cells.len()],
        }
    }

    /// Flat index for an in-range coordinate.
    ///
    /// Out-of-range input means a neighbor offset was not normalized before
    /// lookup; that is a defect, so this panics rather than wrapping.
    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) out of bounds for {}x{} grid",
            self.width,
            self.height,
        );
        y * self.width + x
    }

    /// State of the cell at `(x, y)`. Requires in-range coordinates.
    pub fn get(&self, x: usize, y: usize) -> CellState {
        self.cells[self.index(x, y)]
    }

    /// Overwrite the cell at `(x, y)`. Requires in-range coordinates.
    ///
    /// The sole mutation point for cell state.
    pub fn set(&mut self, x: usize, y: usize, state: CellState) {
        let idx = self.index(x, y);
        self.cells[idx] = state;
    }

    /// Count live cells among the 8 toroidal neighbors of `(x, y)`.
    ///
    /// Offsets that step past an edge wrap to the opposite edge. `rem_euclid`
    /// keeps the wrapped coordinate non-negative when an offset goes below
    /// zero (plain `%` would not).
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let (w, h) = (self.width as i64, self.height as i64);
        let mut live = 0;
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let nx = (x as i64 + dx).rem_euclid(w) as usize;
            let ny = (y as i64 + dy).rem_euclid(h) as usize;
            if self.get(nx, ny).is_alive() {
                live += 1;
            }
        }
        live
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of live cells on the whole grid.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_is_row_major() {
        // The initializer sees coordinates in row-major order.
        let mut seen = Vec::new();
        let grid = Grid::new(3, 2, |x, y| {
            seen.push((x, y));
            CellState::Dead
        })
        .unwrap();

        assert_eq!(seen, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn get_past_width_panics() {
        let grid = Grid::dead(4, 4).unwrap();
        grid.get(4, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn set_past_height_panics() {
        let mut grid = Grid::dead(4, 4).unwrap();
        grid.set(0, 4, CellState::Alive);
    }

    #[test]
    fn blank_like_matches_dimensions() {
        let grid = Grid::new(7, 3, |_, _| CellState::Alive).unwrap();
        let blank = grid.blank_like();
        assert_eq!(blank.width(), 7);
        assert_eq!(blank.height(), 3);
        assert_eq!(blank.population(), 0);
    }
}
