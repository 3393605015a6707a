use std::time::Duration;

use thiserror::Error;

/// Startup parameters shared by the grid, the edit session and the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    width_px: u32,
    height_px: u32,
    cell_size: u32,
    tick_rate_hz: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cell size must be at least one pixel")]
    ZeroCellSize,
    #[error("tick rate must be at least 1 Hz")]
    ZeroTickRate,
    #[error("a {width_px}x{height_px} px window cannot hold a single {cell_size} px cell")]
    GridTooSmall {
        width_px: u32,
        height_px: u32,
        cell_size: u32,
    },
    #[error("grid is {actual:?} cells but the window holds {expected:?}")]
    GridMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}

impl SimulationConfig {
    pub fn new(width_px: u32, height_px: u32, cell_size: u32, tick_rate_hz: u32) -> Result<Self, ConfigError> {
        if cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if tick_rate_hz == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if width_px / cell_size == 0 || height_px / cell_size == 0 {
            return Err(ConfigError::GridTooSmall {
                width_px,
                height_px,
                cell_size,
            });
        }

        Ok(Self {
            width_px,
            height_px,
            cell_size,
            tick_rate_hz,
        })
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn tick_rate_hz(&self) -> u32 {
        self.tick_rate_hz
    }

    /// Number of cell columns; leftover pixels are margin.
    pub fn grid_width(&self) -> usize {
        (self.width_px / self.cell_size) as usize
    }

    /// Number of cell rows; leftover pixels are margin.
    pub fn grid_height(&self) -> usize {
        (self.height_px / self.cell_size) as usize
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate_hz
    }

    /// Map a pixel position to the cell underneath it.
    ///
    /// Negative positions and positions in the right/bottom margin map to `None`.
    pub fn cell_at_pixel(&self, px: i32, py: i32) -> Option<(usize, usize)> {
        if px < 0 || py < 0 {
            return None;
        }
        let x = (px as u32 / self.cell_size) as usize;
        let y = (py as u32 / self.cell_size) as usize;
        (x < self.grid_width() && y < self.grid_height()).then_some((x, y))
    }

    /// Top-left pixel of the square covering cell `(x, y)`.
    pub fn cell_origin(&self, x: usize, y: usize) -> (u32, u32) {
        (x as u32 * self.cell_size, y as u32 * self.cell_size)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width_px: 1200,
            height_px: 1000,
            cell_size: 10,
            tick_rate_hz: 50,
        }
    }
}
