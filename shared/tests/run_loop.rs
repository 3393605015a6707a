use std::collections::VecDeque;
use std::time::{Duration, Instant};

use shared::{
    EditSession, Exit, Grid, InputEvent, InputSource, Key, Pacer, PointerButton, RunSummary, Simulation,
    SimulationConfig, SimulationLoop,
};

/// Hands out one batch per poll and asks to quit once the script runs dry.
struct ScriptedInput {
    batches: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    fn new(batches: Vec<Vec<InputEvent>>) -> Self {
        Self {
            batches: batches.into(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.batches.pop_front().unwrap_or_else(|| vec![InputEvent::Quit])
    }
}

struct ManualPacer {
    now: Instant,
    waits: Vec<Instant>,
}

impl ManualPacer {
    fn new() -> Self {
        Self {
            now: Instant::now(),
            waits: Vec::new(),
        }
    }
}

impl Pacer for ManualPacer {
    fn now(&self) -> Instant {
        self.now
    }

    fn wait_until(&mut self, deadline: Instant) {
        self.waits.push(deadline);
        self.now = self.now.max(deadline);
    }
}

fn config() -> SimulationConfig {
    SimulationConfig::new(200, 200, 10, 50).expect("valid config")
}

fn down(x: i32, y: i32) -> InputEvent {
    InputEvent::PointerDown {
        x,
        y,
        button: PointerButton::Primary,
    }
}

fn moved(x: i32, y: i32) -> InputEvent {
    InputEvent::PointerMove { x, y }
}

const START: InputEvent = InputEvent::KeyPress(Key::Space);
const STOP: InputEvent = InputEvent::KeyPress(Key::Char('q'));

/// Three drag strokes covering cells (4..=6, 4..=6).
fn paint_block_around_5_5() -> Vec<InputEvent> {
    let mut events = Vec::new();
    for py in [45, 55, 65] {
        events.push(down(45, py));
        events.push(moved(65, py));
        events.push(InputEvent::PointerUp);
    }
    events
}

fn live(grid: &Grid) -> Vec<(usize, usize)> {
    grid.live_cells().collect()
}

#[test]
fn painted_block_evolves_one_generation() {
    let mut input = ScriptedInput::new(vec![paint_block_around_5_5(), vec![START], vec![], vec![STOP]]);
    let mut frames: Vec<Grid> = Vec::new();
    let mut renderer = |grid: &Grid| frames.push(grid.clone());
    let mut pacer = ManualPacer::new();
    let started = pacer.now;

    let summary = SimulationLoop::new(&config()).run(&mut input, &mut renderer, &mut pacer);

    assert_eq!(
        summary,
        RunSummary {
            exit: Exit::Stopped,
            generations: 2
        }
    );
    assert_eq!(frames.len(), 3, "one edit frame then one frame per generation");
    assert_eq!(frames[0].population(), 9);
    assert_eq!(
        live(&frames[1]),
        vec![(5, 3), (4, 4), (6, 4), (3, 5), (7, 5), (4, 6), (6, 6), (5, 7)],
        "corners survive and each side sprouts a cell"
    );
    assert_eq!(
        pacer.waits,
        vec![started + Duration::from_millis(20), started + Duration::from_millis(40)]
    );
}

#[test]
fn quitting_while_editing_never_steps() {
    let mut input = ScriptedInput::new(vec![vec![down(5, 5)], vec![InputEvent::Quit]]);
    let mut frames = 0;
    let mut renderer = |_: &Grid| frames += 1;
    let mut pacer = ManualPacer::new();

    let summary = SimulationLoop::new(&config()).run(&mut input, &mut renderer, &mut pacer);

    assert_eq!(summary.exit, Exit::Quit);
    assert_eq!(summary.generations, 0);
    assert_eq!(frames, 1);
    assert!(pacer.waits.is_empty(), "editing is not paced");
}

#[test]
fn stop_key_is_only_honoured_once_running() {
    let mut input = ScriptedInput::new(vec![vec![STOP], vec![START], vec![STOP]]);
    let mut renderer = |_: &Grid| {};
    let mut pacer = ManualPacer::new();

    let summary = SimulationLoop::new(&config()).run(&mut input, &mut renderer, &mut pacer);

    assert_eq!(
        summary,
        RunSummary {
            exit: Exit::Stopped,
            generations: 1
        }
    );
}

#[test]
fn empty_grid_stays_empty_while_running() {
    let mut input = ScriptedInput::new(vec![vec![START], vec![], vec![], vec![], vec![InputEvent::Quit]]);
    let mut populations = Vec::new();
    let mut renderer = |grid: &Grid| populations.push(grid.population());
    let mut pacer = ManualPacer::new();

    let summary = SimulationLoop::new(&config()).run(&mut input, &mut renderer, &mut pacer);

    assert_eq!(summary.exit, Exit::Quit);
    assert_eq!(summary.generations, 4);
    assert_eq!(populations, vec![0; 4]);
}

#[test]
fn seeded_randomize_is_reproducible_across_runs() {
    let run = || {
        let session = EditSession::new(&config()).seeded(9);
        let mut input = ScriptedInput::new(vec![vec![InputEvent::KeyPress(Key::Char('r')), START], vec![STOP]]);
        let mut frames: Vec<Grid> = Vec::new();
        let mut renderer = |grid: &Grid| frames.push(grid.clone());
        let summary = SimulationLoop::from(Simulation::from_session(session)).run(
            &mut input,
            &mut renderer,
            &mut ManualPacer::new(),
        );
        (summary, frames)
    };

    let (first_summary, first_frames) = run();
    let (second_summary, second_frames) = run();
    assert_eq!(first_summary, second_summary);
    assert_eq!(first_frames, second_frames);
    assert!(first_frames[0].population() > 0);
}
