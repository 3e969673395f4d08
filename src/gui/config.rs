use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const FRAME_MARGIN: f32 = 20.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
    pub const BACKGROUND_COLOR: Color32 = Color32::WHITE;

    pub const WIDGET_GAP: f32 = 20.;

    // cells are 32 px squares on a 34 px pitch; clicks in the 2 px gap
    // select nothing
    pub const CELL_SIZE: f32 = 32.;
    pub const CELL_PITCH: f32 = 34.;

    pub const DEFAULT_DELAY_MS: u32 = 250;
    pub const MAX_DELAY_MS: u32 = 1000;
    pub const MAX_FPS: f64 = 60.;
}
