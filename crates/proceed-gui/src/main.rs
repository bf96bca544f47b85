//! Proceed popup demo.
//!
//! A host window that raises sample questions from the UI thread and from
//! background workers, and shows them through the queued popup.

mod app;
mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;

use proceed_core::PopupSettings;
use proceed_gui::logging::{LogConfig, init_logging};

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = LogConfig::default()
        .with_level_filter(cli.verbosity.tracing_level_filter())
        .with_env_filter(!cli.verbosity.is_present())
        .with_format(cli.log_format.into())
        .with_log_file(cli.log_file.clone());
    init_logging(&log_config).context("failed to initialize logging")?;

    let settings = match &cli.settings {
        Some(path) => PopupSettings::load_from(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => PopupSettings::load(),
    };
    tracing::debug!(?settings, "Popup settings");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Proceed demo")
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    let sample_log = cli.sample_log;
    eframe::run_native(
        "Proceed demo",
        options,
        Box::new(move |cc| Ok(Box::new(app::DemoApp::new(cc, settings, sample_log)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the demo window: {e}"))
}
