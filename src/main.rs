#![windows_subsystem = "windows"]
//! Burnout Calculator - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use burnout_calculator::app::App;
use burnout_calculator::constants::*;
use burnout_calculator::{settings, utils};
use eframe::egui;
use tracing::{error, info};

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "burnout-calculator.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,burnout_calculator=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = utils::get_data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Burnout Calculator starting");

    let settings = settings::Settings::resolve(&data_dir);
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => egui::vec2(w, h),
        _ => egui::vec2(1200.0, 900.0),
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size)
        .with_min_inner_size([900.0, 600.0])
        .with_title(APP_NAME);

    if let Some((rgba, width, height)) = utils::rasterize_icon(64) {
        let icon = egui::IconData { rgba, width, height };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let options = eframe::NativeOptions {
        viewport,
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| match App::new(cc, settings, data_dir) {
            Ok(app) => Ok(Box::new(app)),
            Err(e) => {
                error!(error = %e, "Failed to start application");
                Err(e.into())
            }
        }),
    )
}
