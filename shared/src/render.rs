use crate::config::SimulationConfig;
use crate::grid::{CellState, Grid};

/// Frame sink implemented by the display.
pub trait Render {
    fn render(&mut self, grid: &Grid);
}

impl<F: FnMut(&Grid)> Render for F {
    fn render(&mut self, grid: &Grid) {
        self(grid)
    }
}

pub type Rgb = [u8; 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub accent: Rgb,
}

impl Palette {
    pub fn color(&self, state: CellState) -> Rgb {
        match state {
            CellState::Alive => self.accent,
            CellState::Dead => self.background,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: [0, 0, 0],
            accent: [255, 165, 0],
        }
    }
}

/// Pixel-space square covering one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSquare {
    pub x: u32,
    pub y: u32,
    pub size: u32,
    pub state: CellState,
}

pub fn cell_squares<'a>(grid: &'a Grid, config: &'a SimulationConfig) -> impl Iterator<Item = CellSquare> + 'a {
    grid.rows().enumerate().flat_map(move |(row_index, row)| {
        row.iter().enumerate().map(move |(col_index, cell)| {
            let (x, y) = config.cell_origin(col_index, row_index);
            CellSquare {
                x,
                y,
                size: config.cell_size(),
                state: *cell,
            }
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellState::{Alive, Dead};

    #[test]
    fn palette_keys_on_state() {
        let palette = Palette::default();
        assert_eq!(palette.color(Dead), [0, 0, 0]);
        assert_eq!(palette.color(Alive), [255, 165, 0]);
    }

    #[test]
    fn squares_tile_the_grid() {
        let config = SimulationConfig::new(35, 20, 10, 50).unwrap();
        let mut grid = Grid::new(config.grid_width(), config.grid_height());
        grid.set(2, 1, Alive);

        let squares: Vec<_> = cell_squares(&grid, &config).collect();
        assert_eq!(squares.len(), 6);
        assert_eq!(
            squares[5],
            CellSquare {
                x: 20,
                y: 10,
                size: 10,
                state: Alive
            }
        );
        assert_eq!(squares.iter().filter(|square| square.state == Alive).count(), 1);
    }

    #[test]
    fn closures_render() {
        let mut frames = 0;
        let mut renderer = |grid: &Grid| frames += grid.width();
        renderer.render(&Grid::new(3, 1));
        renderer.render(&Grid::new(3, 1));
        assert_eq!(frames, 6);
    }
}
