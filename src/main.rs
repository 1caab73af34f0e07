mod app;
mod playback;
mod types;
mod viewport;
mod walk;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([800.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Turning Walk",
        options,
        Box::new(|cc| Ok(Box::new(app::WalkApp::new(cc)))),
    )
}
