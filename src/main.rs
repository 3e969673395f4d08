#![warn(clippy::all)]

fn main() {
    use eframe::egui::{vec2, ViewportBuilder};

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(1024., 768.))
            .with_min_inner_size(vec2(960., 720.)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Colored Life",
        options,
        Box::new(move |_cc| Ok(Box::new(colorlife::App::new()))),
    )
    .unwrap();
}
