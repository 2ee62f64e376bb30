// ShelfTrack - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Config and inventory loading
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use shelftrack::app;
pub use shelftrack::core;
pub use shelftrack::platform;
pub use shelftrack::ui;
pub use shelftrack::util;

use clap::Parser;
use std::path::PathBuf;

/// ShelfTrack - Single-user desktop inventory tracker.
///
/// Records products with quantities, prices, and expiry dates, keeps them
/// in a local JSON file, and shows stock and expiry status at a glance.
#[derive(Parser, Debug)]
#[command(name = "ShelfTrack", version, about)]
struct Cli {
    /// Directory holding the inventory file (platform data dir if omitted).
    #[arg(short = 'D', long = "data-dir")]
    data_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and load config before logging init so the
    // configured level can take effect.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "ShelfTrack starting"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    // Determine the data directory: CLI override > platform default.
    let data_dir = cli
        .data_dir
        .as_deref()
        .unwrap_or(&platform_paths.data_dir);

    // Load the inventory (an empty collection on first run).
    let inventory_path = app::persist::inventory_path(data_dir);
    let store = app::store::InventoryStore::load(inventory_path);

    tracing::info!(products = store.products().len(), "Ready to launch GUI");

    let state = app::state::AppState::new(store, cli.debug);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([700.0, 450.0]),
        ..Default::default()
    };

    let dark_mode = config.dark_mode;
    let font_size = config.font_size;

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_theme(if dark_mode {
                egui::Theme::Dark
            } else {
                egui::Theme::Light
            });
            cc.egui_ctx.style_mut(|style| {
                for (_, font_id) in style.text_styles.iter_mut() {
                    font_id.size = font_size * (font_id.size / 14.0);
                }
            });
            Ok(Box::new(gui::ShelfTrackApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch ShelfTrack GUI: {e}");
        std::process::exit(1);
    }
}
