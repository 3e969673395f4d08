use super::{App, Config};
use eframe::egui::{vec2, Button, Color32, Rect, RichText, Sense, Slider, Stroke, Ui};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        ui.group(|ui| {
            ui.vertical(|ui| {
                let text = if self.is_paused { "Paused" } else { "Running" };
                if ui.add(Self::new_button(text)).clicked() {
                    self.is_paused = !self.is_paused;
                }
                ui.add_space(Config::WIDGET_GAP);

                ui.add_enabled(self.is_paused, |ui: &mut Ui| {
                    let response = ui.add(Self::new_button("Next step"));
                    if response.clicked() {
                        self.do_one_step = true;
                    }
                    response
                });
                ui.add_space(Config::WIDGET_GAP);

                ui.label(Self::new_text(&format!(
                    "Generations: {}",
                    self.generation
                )));
                ui.add_space(Config::WIDGET_GAP);

                if ui.add(Self::new_button("Randomize")).clicked() {
                    self.field.randomize();
                }
                ui.add_space(Config::WIDGET_GAP);

                if ui.add(Self::new_button("Reset")).clicked() {
                    self.reset();
                }
                ui.add_space(Config::WIDGET_GAP);

                ui.label(Self::new_text(&format!("Speed: {} ms", self.step_delay_ms)));
                ui.add(Slider::new(&mut self.step_delay_ms, 0..=Config::MAX_DELAY_MS));
                ui.add_space(Config::WIDGET_GAP);

                ui.label(Self::new_text(&format!(
                    "FPS: {:3}",
                    self.fps_limiter.fps().round() as u32
                )));
            });
        });
    }

    fn draw_field(&mut self, ui: &mut Ui) {
        let size = self.field.size();
        let side = size as f32 * Config::CELL_PITCH;
        let (rect, _response) = ui.allocate_exact_size(vec2(side, side), Sense::hover());

        let painter = ui.painter_at(rect);
        for row in 0..size {
            for col in 0..size {
                let [r, g, b] = self.field.get(row, col).rgb8();
                let min = rect.left_top()
                    + vec2(
                        col as f32 * Config::CELL_PITCH,
                        row as f32 * Config::CELL_PITCH,
                    );
                let cell = Rect::from_min_size(min, vec2(Config::CELL_SIZE, Config::CELL_SIZE));
                painter.rect_filled(cell, 0., Color32::from_rgb(r, g, b));
            }
        }

        self.grid_rect.replace(rect);
    }

    pub(super) fn draw(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            self.draw_field(ui);

            ui.add_space(Config::WIDGET_GAP);

            ui.vertical(|ui| {
                self.draw_controls(ui);
            });
        });
    }
}
