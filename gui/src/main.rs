use std::time::{Duration, Instant};

use anyhow::Context;
use eframe::egui;
use eframe::run_native;
use shared::{
    cell_squares, CellState, Grid, InputEvent, Key, Palette, Phase, PointerButton, Render, Rgb, Simulation,
    SimulationConfig,
};
use log::info;

const WINDOW_WIDTH: u32 = 1200;
const WINDOW_HEIGHT: u32 = 1000;
const CELL_SIZE: u32 = 10;
const TICK_RATE_HZ: u32 = 50;
const STATUS_HEIGHT: f32 = 32.0;
const RATE_LOG_INTERVAL: Duration = Duration::from_secs(1);

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = SimulationConfig::new(WINDOW_WIDTH, WINDOW_HEIGHT, CELL_SIZE, TICK_RATE_HZ)
        .context("invalid simulation settings")?;
    info!(
        "{}x{} grid of {} px cells at {} Hz",
        config.grid_width(),
        config.grid_height(),
        config.cell_size(),
        config.tick_rate_hz()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Game of Life - press space to start, q to stop")
            .with_inner_size([config.width_px() as f32, config.height_px() as f32 + STATUS_HEIGHT])
            .with_resizable(false),
        ..Default::default()
    };

    run_native(
        "Paint of Life",
        options,
        Box::new(move |cc| Ok(Box::new(PaintOfLife::new(cc, config)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run the display: {err}"))
}

struct PaintOfLife {
    config: SimulationConfig,
    simulation: Simulation,
    palette: Palette,
    queued: Vec<InputEvent>,
    steps_since_log: u32,
    last_rate_log: Instant,
}

impl PaintOfLife {
    fn new(_cc: &eframe::CreationContext<'_>, config: SimulationConfig) -> Self {
        Self {
            config,
            simulation: Simulation::new(&config),
            palette: Palette::default(),
            queued: Vec::new(),
            steps_since_log: 0,
            last_rate_log: Instant::now(),
        }
    }

    fn status_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_centered(|ui| {
            ui.heading("Game of Life");
            ui.separator();
            match self.simulation.phase() {
                Phase::Editing => {
                    ui.label("Drag to paint, right button erases. c clears, space starts.");
                    if ui.button("Randomize").clicked() {
                        self.queued.push(InputEvent::KeyPress(Key::Char('r')));
                    }
                }
                Phase::Running => {
                    ui.label(format!(
                        "Generation {} - {} alive - q stops",
                        self.simulation.generation_index(),
                        self.simulation.grid().population()
                    ));
                }
                Phase::Finished(_) => {
                    ui.label("Stopped");
                }
            }
        });
    }

    fn log_rate(&mut self, now: Instant) {
        let elapsed = now.duration_since(self.last_rate_log);
        if elapsed >= RATE_LOG_INTERVAL {
            let rate = self.steps_since_log as f64 / elapsed.as_secs_f64();
            info!("generations/s: {:.1}", rate);
            self.steps_since_log = 0;
            self.last_rate_log = now;
        }
    }
}

impl eframe::App for PaintOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("status")
            .exact_height(STATUS_HEIGHT)
            .show(ctx, |ui| self.status_bar(ui));

        egui::CentralPanel::default().frame(egui::Frame::none()).show(ctx, |ui| {
            let size = egui::vec2(self.config.width_px() as f32, self.config.height_px() as f32);
            let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
            let origin = response.rect.min;

            let mut events = std::mem::take(&mut self.queued);
            events.extend(ctx.input(|input| translate_events(input, origin)));

            if let Some(exit) = self.simulation.handle_events(events) {
                info!("closing window: {:?}", exit);
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }

            let now = Instant::now();
            if self.simulation.tick(now).is_some() {
                self.steps_since_log += 1;
                self.log_rate(now);
            }
            if let Some(wait) = self.simulation.next_tick_in(now) {
                ctx.request_repaint_after(wait);
            }

            GridPainter {
                painter: &painter,
                origin,
                config: &self.config,
                palette: self.palette,
            }
            .render(self.simulation.grid());
        });
    }
}

/// Draws grid frames into the central panel.
struct GridPainter<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    config: &'a SimulationConfig,
    palette: Palette,
}

impl Render for GridPainter<'_> {
    fn render(&mut self, grid: &Grid) {
        let board = egui::Rect::from_min_size(
            self.origin,
            egui::vec2(self.config.width_px() as f32, self.config.height_px() as f32),
        );
        self.painter
            .rect_filled(board, 0.0, to_color(self.palette.color(CellState::Dead)));

        let accent = to_color(self.palette.color(CellState::Alive));
        for square in cell_squares(grid, self.config).filter(|square| square.state.is_alive()) {
            let min = self.origin + egui::vec2(square.x as f32, square.y as f32);
            let rect = egui::Rect::from_min_size(min, egui::vec2(square.size as f32, square.size as f32));
            self.painter.rect_filled(rect, 0.0, accent);
        }
    }
}

fn to_color([r, g, b]: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(r, g, b)
}

/// Translate this frame's egui input into simulation events, with pointer
/// positions relative to the grid's top-left corner.
fn translate_events(input: &egui::InputState, origin: egui::Pos2) -> Vec<InputEvent> {
    let mut events = Vec::new();
    if input.viewport().close_requested() {
        events.push(InputEvent::Quit);
    }

    for event in &input.events {
        match event {
            egui::Event::PointerButton {
                pos, button, pressed, ..
            } => {
                let button = match button {
                    egui::PointerButton::Primary => PointerButton::Primary,
                    egui::PointerButton::Secondary => PointerButton::Secondary,
                    _ => continue,
                };
                if *pressed {
                    let (x, y) = grid_pixel(*pos, origin);
                    events.push(InputEvent::PointerDown { x, y, button });
                } else {
                    events.push(InputEvent::PointerUp);
                }
            }
            egui::Event::PointerMoved(pos) => {
                let (x, y) = grid_pixel(*pos, origin);
                events.push(InputEvent::PointerMove { x, y });
            }
            egui::Event::PointerGone => events.push(InputEvent::PointerUp),
            egui::Event::Key {
                key,
                pressed: true,
                repeat: false,
                ..
            } => {
                if *key == egui::Key::Escape {
                    events.push(InputEvent::Quit);
                } else if let Some(key) = translate_key(*key) {
                    events.push(InputEvent::KeyPress(key));
                }
            }
            _ => {}
        }
    }
    events
}

fn translate_key(key: egui::Key) -> Option<Key> {
    if key == egui::Key::Space {
        return Some(Key::Space);
    }
    let mut chars = key.name().chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii_alphanumeric() => Some(Key::Char(ch.to_ascii_lowercase())),
        _ => None,
    }
}

fn grid_pixel(pos: egui::Pos2, origin: egui::Pos2) -> (i32, i32) {
    let offset = pos - origin;
    (offset.x.floor() as i32, offset.y.floor() as i32)
}
