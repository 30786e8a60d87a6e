#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 360.0])
            .with_min_inner_size([440.0, 320.0]),
        ..Default::default()
    };
    eframe::run_native(
        "sketchpad",
        native_options,
        Box::new(|cc| Ok(Box::new(sketchpad::SketchApp::new(cc)))),
    )
}
