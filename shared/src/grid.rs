use crate::grid::CellState::{Alive, Dead};
use rand::Rng;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == Alive
    }
}

/// Fixed-size cell buffer, stored row-major.
///
/// Reads outside the grid return [`CellState::Dead`] and writes outside it are
/// ignored, so callers doing edge arithmetic never need to pre-check bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellState>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            cells: vec![Dead; width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: usize, y: usize) -> CellState {
        if self.contains(x, y) {
            self.cells[y * self.width + x]
        } else {
            Dead
        }
    }

    pub fn set(&mut self, x: usize, y: usize, state: CellState) {
        if self.contains(x, y) {
            self.cells[y * self.width + x] = state;
        }
    }

    /// Signed lookup for neighbor and brush arithmetic that may step off the grid.
    pub fn cell(&self, x: i64, y: i64) -> CellState {
        if x < 0 || y < 0 {
            return Dead;
        }
        self.get(x as usize, y as usize)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        self.cells.chunks(self.width.max(1))
    }

    /// Coordinates of every live cell, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(index, _)| (index % width, index / width))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(Dead);
    }

    /// Bring each cell to life with probability `density`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = density.clamp(0.0, 1.0);
        for cell in self.cells.iter_mut() {
            *cell = if rng.random_bool(density) { Alive } else { Dead };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_grid_is_all_dead() {
        let grid = Grid::new(4, 3);
        assert_eq!((grid.width(), grid.height()), (4, 3));
        assert_eq!(grid.population(), 0);
        assert!(grid.rows().all(|row| row.len() == 4 && row.iter().all(|c| *c == Dead)));
        assert_eq!(grid.rows().count(), 3);
    }

    #[test]
    fn set_then_get() {
        let mut grid = Grid::new(4, 3);
        grid.set(3, 2, Alive);
        assert_eq!(grid.get(3, 2), Alive);
        assert_eq!(grid.get(2, 3), Dead);
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(3, 2)]);
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut grid = Grid::new(2, 2);
        grid.set(2, 0, Alive);
        grid.set(0, 2, Alive);
        assert_eq!(grid, Grid::new(2, 2));
        assert_eq!(grid.get(5, 5), Dead);
        assert_eq!(grid.cell(-1, 0), Dead);
        assert_eq!(grid.cell(0, -1), Dead);
    }

    #[test]
    fn live_cells_are_row_major() {
        let mut grid = Grid::new(3, 3);
        grid.set(2, 0, Alive);
        grid.set(0, 1, Alive);
        grid.set(1, 2, Alive);
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(2, 0), (0, 1), (1, 2)]);
        assert_eq!(grid.population(), 3);
        grid.clear();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn randomize_respects_density_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(10, 10);
        grid.randomize(&mut rng, 1.0);
        assert_eq!(grid.population(), 100);
        grid.randomize(&mut rng, 0.0);
        assert_eq!(grid.population(), 0);
        grid.randomize(&mut rng, 0.5);
        assert!(grid.population() > 0 && grid.population() < 100);
    }
}
