//! # MUST3Y Terminal - Binary Entry Point
//!
//! Initializes logging, then hands control to eframe. The `#[tokio::main]`
//! runtime stays alive for the whole window lifetime so UI handlers can
//! `tokio::spawn` their background work.

use must3y::ui::window::TerminalWindow;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> eframe::Result<()> {
    // Keep the guard alive so buffered log lines flush on exit
    let _log_guard = init_tracing();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting MUST3Y terminal");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("MUST3Y")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "MUST3Y",
        options,
        Box::new(|cc| Ok(Box::new(TerminalWindow::new(cc)))),
    )
}

/// Set up the tracing stack: compact stderr output plus a daily-rolling
/// file in `logs/`. Filtering comes from `RUST_LOG`, defaulting to info
/// for this crate and warn for everything else.
fn init_tracing() -> tracing_appender::non_blocking::WorkerGuard {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("must3y=info,warn"));

    let file_appender = tracing_appender::rolling::daily("logs", "must3y.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .init();

    guard
}
