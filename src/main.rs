// ScrapeDeck - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use scrapedeck::app;
pub use scrapedeck::core;
pub use scrapedeck::ui;
pub use scrapedeck::util;

use clap::Parser;

/// ScrapeDeck - desktop control panel for the scraper backend.
///
/// Point ScrapeDeck at the backend that exposes /api/run-news and
/// /api/run-prices, then trigger jobs and watch their console output.
#[derive(Parser, Debug)]
#[command(name = "ScrapeDeck", version, about)]
struct Cli {
    /// Base URL of the scraper backend.
    #[arg(short = 's', long = "server", default_value = util::constants::DEFAULT_SERVER_URL)]
    server: String,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialise logging subsystem
    util::logging::init(cli.debug);

    tracing::info!(
        version = util::constants::APP_VERSION,
        server = %cli.server,
        debug = cli.debug,
        "ScrapeDeck starting"
    );

    let state = app::state::AppState::new(cli.server);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([760.0, 560.0])
            .with_min_inner_size([560.0, 400.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::ScrapeDeckApp::new(state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch ScrapeDeck GUI: {e}");
        std::process::exit(1);
    }
}
