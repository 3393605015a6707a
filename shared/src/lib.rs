//! Conway's Game of Life: grid, rules, editing and the run loop.
//!
//! A live cell dies if it has fewer than two live neighbors.
//! A live cell with two or three live neighbors lives on to the next generation.
//! A live cell with more than three live neighbors dies.
//! A dead cell will be brought back to live if it has exactly three live neighbors.
//!
//! Cells past the edge of the grid are dead; the board does not wrap.

pub mod config;
pub mod edit;
pub mod engine;
pub mod grid;
pub mod input;
pub mod neighbors;
pub mod render;
pub mod schedule;
pub mod simulation;

pub use config::{ConfigError, SimulationConfig};
pub use edit::{EditPhase, EditSession};
pub use engine::{step, Generation};
pub use grid::{CellState, Grid};
pub use input::{Command, InputEvent, InputSource, Key, PointerButton};
pub use neighbors::count_live_neighbors;
pub use render::{cell_squares, CellSquare, Palette, Render, Rgb};
pub use schedule::{Pacer, ThreadPacer, TickSchedule};
pub use simulation::{Exit, Phase, RunSummary, Simulation, SimulationLoop, StepReport};
