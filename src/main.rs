mod app;
mod color;
mod config;
mod data;
mod images;
mod state;
mod ui;
mod view;

use anyhow::{Context, Result};
use app::RustyDexApp;
use clap::Parser;
use config::Config;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::parse();

    let dataset = match data::loader::load_dataset(&config.dataset, &config.evolution_index)
        .context("loading dataset")
    {
        Ok(ds) => ds,
        Err(e) => {
            log::error!("Cannot start without a dataset: {e:#}");
            return Err(e);
        }
    };
    let state = AppState::new(dataset, &config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Dex",
        options,
        Box::new(move |cc| {
            // Install image loaders so egui can render file:// pngs.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(RustyDexApp::new(cc, state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {e}"))
}
