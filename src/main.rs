//! Sports Statistics Dashboard
//!
//! Interactive desktop dashboard visualizing per-country sports
//! statistics with dropdown-driven chart updates.

mod charts;
mod data;
mod gui;
mod view;

use eframe::egui;
use gui::DashboardApp;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 850.0])
            .with_min_inner_size([1100.0, 700.0])
            .with_title("Sports Statistics Dashboard"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Sports Statistics Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc)))),
    )
}
