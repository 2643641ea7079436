//! Dense grid cache for the Game of Life engine

use super::Cell;
use std::collections::HashSet;
use std::fmt;

/// Dense N×N boolean matrix derived from an alive set.
///
/// The grid is only ever rebuilt wholesale from the alive set; it is a
/// read cache for neighbor lookups, never a second source of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side_length: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Largest side length whose N×N cell buffer can be allocated
    pub fn max_side_length() -> usize {
        let limit = isize::MAX as usize;
        let mut side = (limit as f64).sqrt() as usize;
        while side.checked_mul(side).map_or(true, |cells| cells > limit) {
            side -= 1;
        }
        side
    }

    /// Create a new grid with every cell dead
    ///
    /// # Panics
    ///
    /// Panics if `side_length` exceeds [`Grid::max_side_length`].
    pub fn new(side_length: usize) -> Self {
        Self {
            side_length,
            cells: vec![false; side_length * side_length],
        }
    }

    /// Rebuild a grid from the set of living cells
    ///
    /// # Panics
    ///
    /// Panics if any cell lies outside the N×N domain.
    pub fn from_alive(side_length: usize, alive: &HashSet<Cell>) -> Self {
        let mut grid = Self::new(side_length);
        for &cell in alive {
            let idx = grid.index(cell);
            grid.cells[idx] = true;
        }
        grid
    }

    /// Convert a coordinate to its row-major index
    #[inline]
    fn index(&self, cell: Cell) -> usize {
        assert!(
            cell.is_within(self.side_length),
            "cell {} out of bounds for {}x{} grid",
            cell,
            self.side_length,
            self.side_length
        );
        cell.x * self.side_length + cell.y
    }

    /// Get cell value at coordinates
    ///
    /// # Panics
    ///
    /// Panics on an out-of-range coordinate. Clamping would silently
    /// read a different cell.
    #[inline]
    pub fn get(&self, cell: Cell) -> bool {
        self.cells[self.index(cell)]
    }

    pub fn side_length(&self) -> usize {
        self.side_length
    }

    /// Get all living cell coordinates in row-major order
    pub fn living_cells(&self) -> Vec<Cell> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(|(idx, _)| Cell::new(idx / self.side_length, idx % self.side_length))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.side_length.max(1)) {
            for &alive in row {
                write!(f, "{}", if alive { "# " } else { ". " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
