//! Drives editing, then the generation loop, until the user stops it.
//!
//! [`Simulation`] is the state machine for hosts whose toolkit calls back once
//! per frame. [`SimulationLoop`] runs the same machine for hosts that own a
//! blocking loop: poll input, step, render, then wait for the next tick.

use std::mem;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::config::{ConfigError, SimulationConfig};
use crate::edit::{EditPhase, EditSession};
use crate::engine::Generation;
use crate::grid::Grid;
use crate::input::{Command, InputEvent, InputSource};
use crate::render::Render;
use crate::schedule::{Pacer, TickSchedule};

/// Why the run ended. Either way the host tears down the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The window was closed.
    Quit,
    /// The stop key was pressed while the simulation ran.
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Running,
    Finished(Exit),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub generation: u64,
    pub population: usize,
    pub changed: bool,
}

enum State {
    Editing(EditSession),
    Running(Generation),
    Finished { generation: Generation, exit: Exit },
}

pub struct Simulation {
    tick_interval: Duration,
    state: State,
    schedule: Option<TickSchedule>,
    settled: bool,
}

impl Simulation {
    pub fn new(config: &SimulationConfig) -> Self {
        Self::from_session(EditSession::new(config))
    }

    pub fn with_grid(config: &SimulationConfig, grid: Grid) -> Result<Self, ConfigError> {
        EditSession::with_grid(config, grid).map(Self::from_session)
    }

    pub fn from_session(session: EditSession) -> Self {
        Self {
            tick_interval: session.config().tick_interval(),
            state: State::Editing(session),
            schedule: None,
            settled: false,
        }
    }

    pub fn phase(&self) -> Phase {
        match &self.state {
            State::Editing(_) => Phase::Editing,
            State::Running(_) => Phase::Running,
            State::Finished { exit, .. } => Phase::Finished(*exit),
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running(_))
    }

    /// The grid a frame should show right now.
    pub fn grid(&self) -> &Grid {
        match &self.state {
            State::Editing(session) => session.grid(),
            State::Running(generation) | State::Finished { generation, .. } => generation.grid(),
        }
    }

    pub fn generation_index(&self) -> u64 {
        match &self.state {
            State::Editing(_) => 0,
            State::Running(generation) | State::Finished { generation, .. } => generation.index(),
        }
    }

    /// Feed a batch of events in arrival order.
    ///
    /// When editing finishes mid-batch, the rest of the batch is read as
    /// running-phase input, so a stop key right after start still counts.
    pub fn handle_events<I>(&mut self, events: I) -> Option<Exit>
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            if let Some(exit) = self.handle(&event) {
                return Some(exit);
            }
        }
        None
    }

    pub fn handle(&mut self, event: &InputEvent) -> Option<Exit> {
        let exit = match &mut self.state {
            State::Finished { exit, .. } => return Some(*exit),
            State::Editing(session) => {
                let exit = session.handle(event);
                if exit.is_none() && session.phase() == EditPhase::Done {
                    self.start_running();
                }
                exit
            }
            State::Running(_) => match event {
                InputEvent::Quit => Some(Exit::Quit),
                _ if event.command() == Some(Command::StopSimulation) => Some(Exit::Stopped),
                _ => None,
            },
        };

        if let Some(exit) = exit {
            self.finish(exit);
        }
        exit
    }

    /// Replace the current generation with its successor.
    pub fn step(&mut self) -> Option<StepReport> {
        let State::Running(generation) = &mut self.state else {
            return None;
        };

        let next = generation.next();
        let changed = next.grid() != generation.grid();
        *generation = next;

        let report = StepReport {
            generation: generation.index(),
            population: generation.population(),
            changed,
        };
        debug!("generation {} has {} live cells", report.generation, report.population);
        if !changed && !self.settled {
            info!(
                "population settled at {} live cells in generation {}",
                report.population, report.generation
            );
        }
        self.settled = !changed;

        Some(report)
    }

    /// Step if a tick is due. The first tick after editing fires immediately.
    pub fn tick(&mut self, now: Instant) -> Option<StepReport> {
        if !self.is_running() {
            return None;
        }
        let due = match self.schedule.as_mut() {
            Some(schedule) => schedule.poll_due(now),
            None => {
                self.schedule = Some(TickSchedule::new(self.tick_interval, now));
                true
            }
        };
        if due {
            self.step()
        } else {
            None
        }
    }

    /// Time left before [`Simulation::tick`] would step again.
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        if !self.is_running() {
            return None;
        }
        Some(
            self.schedule
                .as_ref()
                .map_or(Duration::ZERO, |schedule| schedule.remaining(now)),
        )
    }

    fn start_running(&mut self) {
        if let State::Editing(session) = mem::replace(&mut self.state, placeholder()) {
            let generation = session.finish();
            info!("simulation started with {} live cells", generation.population());
            self.state = State::Running(generation);
        }
    }

    fn finish(&mut self, exit: Exit) {
        let generation = match mem::replace(&mut self.state, placeholder()) {
            State::Editing(session) => session.finish(),
            State::Running(generation) | State::Finished { generation, .. } => generation,
        };
        info!("run ended ({:?}) at generation {}", exit, generation.index());
        self.state = State::Finished { generation, exit };
    }
}

fn placeholder() -> State {
    State::Running(Generation::initial(Grid::new(0, 0)))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub exit: Exit,
    pub generations: u64,
}

/// Blocking driver for hosts that own their event loop.
pub struct SimulationLoop {
    simulation: Simulation,
}

impl SimulationLoop {
    pub fn new(config: &SimulationConfig) -> Self {
        Self::from(Simulation::new(config))
    }

    pub fn with_grid(config: &SimulationConfig, grid: Grid) -> Result<Self, ConfigError> {
        Simulation::with_grid(config, grid).map(Self::from)
    }

    /// Run until the input source asks to quit or stop.
    ///
    /// While editing, every poll is followed by a redraw with no pacing. While
    /// running, each iteration steps once, renders the new generation, and then
    /// waits for the next tick deadline.
    pub fn run<I, R, P>(self, input: &mut I, renderer: &mut R, pacer: &mut P) -> RunSummary
    where
        I: InputSource + ?Sized,
        R: Render + ?Sized,
        P: Pacer + ?Sized,
    {
        let mut simulation = self.simulation;
        let mut schedule: Option<TickSchedule> = None;

        loop {
            if let Some(exit) = simulation.handle_events(input.poll()) {
                return RunSummary {
                    exit,
                    generations: simulation.generation_index(),
                };
            }

            if simulation.is_running() {
                simulation.step();
                renderer.render(simulation.grid());
                let schedule = schedule.get_or_insert_with(|| TickSchedule::new(simulation.tick_interval, pacer.now()));
                let deadline = schedule.next_deadline(pacer.now());
                pacer.wait_until(deadline);
            } else {
                renderer.render(simulation.grid());
            }
        }
    }
}

impl From<Simulation> for SimulationLoop {
    fn from(simulation: Simulation) -> Self {
        Self { simulation }
    }
}
