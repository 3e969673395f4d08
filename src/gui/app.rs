use super::{Config, FpsLimiter};
use crate::ColorField;
use eframe::egui::{CentralPanel, Context, Frame, Key, Margin, Rect};
use std::time::{Duration, Instant};

pub struct App {
    pub(super) field: ColorField,  // Colored GoL engine.
    pub(super) is_paused: bool,    // Flag indicating whether the simulation is paused.
    pub(super) do_one_step: bool,  // Do one step and pause.
    pub(super) generation: u64,    // Current generation number.
    pub(super) step_delay_ms: u32, // Delay between generations, set by the speed slider.
    pub(super) last_step: Instant, // When the previous generation was computed.
    pub(super) grid_rect: Option<Rect>, // Part of the window displaying the field.
    pub(super) fps_limiter: FpsLimiter, // Limits the frame rate to a certain value.
}

impl App {
    pub fn new() -> Self {
        Self {
            field: ColorField::new(ColorField::DEFAULT_SIZE, None),
            is_paused: true,
            do_one_step: false,
            generation: 0,
            step_delay_ms: Config::DEFAULT_DELAY_MS,
            last_step: Instant::now(),
            grid_rect: None,
            fps_limiter: FpsLimiter::default(),
        }
    }

    /// Blank field, generation counter back to zero.
    pub(super) fn reset(&mut self) {
        self.field.reset();
        self.generation = 0;
    }

    fn update_engine(&mut self) {
        if self.is_paused && !self.do_one_step {
            return;
        }
        let delay = Duration::from_millis(self.step_delay_ms as u64);
        if !self.do_one_step && self.last_step.elapsed() < delay {
            return;
        }

        self.field.advance();
        self.generation += 1;
        self.last_step = Instant::now();
        self.do_one_step = false;
    }

    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|input| {
            if let (Some(grid_rect), Some(pos)) = (self.grid_rect, input.pointer.latest_pos()) {
                if grid_rect.contains(pos) && input.pointer.primary_pressed() {
                    let p = pos - grid_rect.left_top();
                    if let Some((row, col)) = Self::hit_test(p.x, p.y, self.field.size()) {
                        self.field.toggle(row, col);
                    }
                }
            }
            if input.key_pressed(Key::Space) {
                self.do_one_step = true;
            }
            if input.key_pressed(Key::E) && !input.modifiers.ctrl {
                self.is_paused = !self.is_paused;
            }
        });
    }

    /// Maps a position relative to the grid's top left corner to cell
    /// coordinates. Returns `None` for the gaps between cells.
    pub(super) fn hit_test(x: f32, y: f32, size: usize) -> Option<(usize, usize)> {
        if x < 0. || y < 0. {
            return None;
        }
        let (row, col) = (
            (y / Config::CELL_PITCH) as usize,
            (x / Config::CELL_PITCH) as usize,
        );
        if row >= size || col >= size {
            return None;
        }
        if x % Config::CELL_PITCH >= Config::CELL_SIZE || y % Config::CELL_PITCH >= Config::CELL_SIZE
        {
            return None;
        }
        Some((row, col))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Config::BACKGROUND_COLOR),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                self.handle_input(ctx);

                self.draw(ui);

                self.update_engine();
            });

        self.fps_limiter.sleep(Config::MAX_FPS);
    }
}
