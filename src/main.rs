use eframe::egui;

use rusty_eda::app::ExplorerApp;
use rusty_eda::ui::panels;

fn main() -> eframe::Result {
    env_logger::init();

    let mut app = ExplorerApp::default();
    if let Some(path) = std::env::args_os().nth(1) {
        panels::open_path(&mut app.state, path.into());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty EDA – Dataset Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
