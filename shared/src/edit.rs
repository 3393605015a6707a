//! Interactive editing of the initial generation.
//!
//! Painting works as click-and-drag: pressing the primary button paints the
//! cell under the pointer alive and every cell the pointer crosses until the
//! button is released. Painting an already-alive cell is a no-op. The
//! secondary button erases with the same mechanics.

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{ConfigError, SimulationConfig};
use crate::engine::Generation;
use crate::grid::CellState::{Alive, Dead};
use crate::grid::{CellState, Grid};
use crate::input::{Command, InputEvent, PointerButton};
use crate::simulation::Exit;

/// Probability of a cell being alive after [`Command::Randomize`].
pub const RANDOM_DENSITY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase {
    Editing,
    Done,
}

#[derive(Debug, Clone, Copy)]
struct Stroke {
    paint: CellState,
    last: Option<(usize, usize)>,
}

pub struct EditSession {
    config: SimulationConfig,
    grid: Grid,
    phase: EditPhase,
    stroke: Option<Stroke>,
    rng: StdRng,
}

impl EditSession {
    pub fn new(config: &SimulationConfig) -> Self {
        Self::start(config, Grid::new(config.grid_width(), config.grid_height()))
    }

    /// Start editing from an existing grid, which must match the size `config` implies.
    pub fn with_grid(config: &SimulationConfig, grid: Grid) -> Result<Self, ConfigError> {
        if (grid.width(), grid.height()) != (config.grid_width(), config.grid_height()) {
            return Err(ConfigError::GridMismatch {
                expected: (config.grid_width(), config.grid_height()),
                actual: (grid.width(), grid.height()),
            });
        }
        Ok(Self::start(config, grid))
    }

    fn start(config: &SimulationConfig, grid: Grid) -> Self {
        Self {
            config: *config,
            grid,
            phase: EditPhase::Editing,
            stroke: None,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Replace the randomizer with a deterministic one.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn phase(&self) -> EditPhase {
        self.phase
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_painting(&self) -> bool {
        self.stroke.is_some()
    }

    /// Apply one event. Returns the exit request when the user asked to quit.
    ///
    /// Once the session is done every further event is ignored.
    pub fn handle(&mut self, event: &InputEvent) -> Option<Exit> {
        if self.phase == EditPhase::Done {
            return None;
        }
        trace!("edit event {:?}", event);

        match *event {
            InputEvent::Quit => return Some(Exit::Quit),
            InputEvent::PointerDown { x, y, button } => self.begin_stroke(x, y, button),
            InputEvent::PointerMove { x, y } => self.continue_stroke(x, y),
            InputEvent::PointerUp => self.stroke = None,
            InputEvent::KeyPress(key) => match key.command() {
                Some(Command::StartSimulation) => {
                    self.stroke = None;
                    self.phase = EditPhase::Done;
                    info!("editing finished with {} live cells", self.grid.population());
                }
                Some(Command::Randomize) => {
                    self.stroke = None;
                    self.grid.randomize(&mut self.rng, RANDOM_DENSITY);
                    debug!("randomized grid, {} live cells", self.grid.population());
                }
                Some(Command::Clear) => {
                    self.stroke = None;
                    self.grid.clear();
                    debug!("cleared grid");
                }
                // Stopping only applies to a running simulation.
                Some(Command::StopSimulation) | None => {}
            },
        }
        None
    }

    /// Hand the edited grid over as generation zero.
    pub fn finish(self) -> Generation {
        Generation::initial(self.grid)
    }

    fn begin_stroke(&mut self, px: i32, py: i32, button: PointerButton) {
        let Some(cell) = self.config.cell_at_pixel(px, py) else {
            return;
        };
        let paint = match button {
            PointerButton::Primary => Alive,
            PointerButton::Secondary => Dead,
        };
        self.grid.set(cell.0, cell.1, paint);
        self.stroke = Some(Stroke {
            paint,
            last: Some(cell),
        });
    }

    fn continue_stroke(&mut self, px: i32, py: i32) {
        let Some(stroke) = self.stroke.as_mut() else {
            return;
        };
        let Some(cell) = self.config.cell_at_pixel(px, py) else {
            stroke.last = None;
            return;
        };
        let from = stroke.last.unwrap_or(cell);
        let paint = stroke.paint;
        stroke.last = Some(cell);

        for (x, y) in line_cells(from, cell) {
            self.grid.set(x, y, paint);
        }
    }
}

/// Cells on the straight line between two cells, both ends included.
fn line_cells(from: (usize, usize), to: (usize, usize)) -> Vec<(usize, usize)> {
    let (mut x, mut y) = (from.0 as i64, from.1 as i64);
    let (x1, y1) = (to.0 as i64, to.1 as i64);
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let mut cells = Vec::with_capacity((dx - dy + 1) as usize);

    loop {
        cells.push((x as usize, y as usize));
        if x == x1 && y == y1 {
            break;
        }
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            x += sx;
        }
        if doubled <= dx {
            err += dx;
            y += sy;
        }
    }
    cells
}
