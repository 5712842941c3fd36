#![windows_subsystem = "windows"]

mod frontend;
mod settings;
mod stockview_app;
mod ui_components;

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use eframe::egui;
use memory_logger::blocking::MemoryLogger;

use stockview_app::StockviewApp;

const PKG_NAME: &str = env!("CARGO_PKG_NAME");

fn main() -> Result<()> {
    let logger = MemoryLogger::setup(log::Level::Info)?;
    // A materials file can be given as the first argument
    let materials_path = std::env::args_os().nth(1).map(PathBuf::from);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(PKG_NAME)
            .with_inner_size([960.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        PKG_NAME,
        native_options,
        Box::new(move |cc| {
            let app = StockviewApp::new(cc, logger, materials_path)?;
            Ok(Box::new(app))
        }),
    )
    .map_err(|err| anyhow!("eframe::run_native failed: {err}"))
}
