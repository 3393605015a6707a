use crate::grid::CellState::{Alive, Dead};
use crate::grid::{CellState, Grid};
use crate::neighbors::count_live_neighbors;

/// Neighbor counts that keep a live cell alive.
pub const SURVIVE: [u8; 2] = [2, 3];
/// Neighbor counts that bring a dead cell to life.
pub const BIRTH: [u8; 1] = [3];

pub fn next_state(cell: CellState, alive_neighbors: u8) -> CellState {
    match (cell, alive_neighbors) {
        (Alive, n) if SURVIVE.contains(&n) => Alive, // Survives
        (Dead, n) if BIRTH.contains(&n) => Alive,    // Becomes alive
        _ => Dead,                                   // Dies or remains dead
    }
}

/// Compute the next generation into a fresh grid.
///
/// Every output cell is derived from `grid` alone; the input is left untouched.
pub fn step(grid: &Grid) -> Grid {
    let mut next_grid = Grid::new(grid.width(), grid.height());

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let alive_neighbors = count_live_neighbors(grid, x, y);
            next_grid.set(x, y, next_state(grid.get(x, y), alive_neighbors));
        }
    }

    next_grid
}

/// Read-only snapshot of the grid at one simulation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    index: u64,
    grid: Grid,
}

impl Generation {
    /// Generation zero, taken from the edited grid.
    pub fn initial(grid: Grid) -> Self {
        Generation { index: 0, grid }
    }

    pub fn next(&self) -> Generation {
        Generation {
            index: self.index + 1,
            grid: step(&self.grid),
        }
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
