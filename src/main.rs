// EcoGuard - environmental monitoring dashboard for the terminal
//
// Sign in, pick a location, then browse alerts, reforestation projects, an
// eco marketplace, community messages and air quality for that area.
//
// Architecture:
// - Session: gate state machine, tabs, collections and simulations; changed
//   only through intents
// - TUI (ratatui): renders the session and turns keys into intents
// - Config: file + env + CLI flags resolved into one Config
// - Logging: tracing events captured into the in-app log panel, optionally
//   mirrored to JSON files

mod cli;
mod config;
mod logging;
mod session;
mod startup;
mod theme;
mod tui;

use anyhow::Result;
use clap::Parser;
use config::{Config, LogRotation, LoggingConfig};
use logging::{LogBuffer, TuiLogLayer};
use session::{Services, Session};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    if cli::handle_command(&cli)? {
        return Ok(());
    }

    // Write the template on first run so the options are discoverable
    Config::ensure_config_exists();

    // Precedence: flags > env > file > defaults
    let mut config = Config::from_env();
    cli.apply_overrides(&mut config);

    let log_buffer = LogBuffer::new();
    // Must outlive the TUI so buffered file logs flush on exit
    let _file_guard = init_tracing(&config.logging, &log_buffer);

    startup::log_startup(&config);

    let settings = config.session.to_settings();
    let services = Services::standard(settings.device_location, config.session.seed);
    let session = Session::new(settings, services);

    tracing::info!("Starting TUI");
    if let Err(e) = tui::run_tui(session, log_buffer, &config).await {
        tracing::error!("TUI error: {:?}", e);
        return Err(e);
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Install the global subscriber
///
/// Logs always go to the TUI log panel (stdout belongs to the alternate
/// screen). File logging adds a JSON layer on a non-blocking rolling writer.
/// Precedence: RUST_LOG env var > config file > default "info".
fn init_tracing(logging: &LoggingConfig, log_buffer: &LogBuffer) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.filter_directive()));

    let (file_layer, guard) = match file_writer(logging) {
        Some((writer, guard)) => {
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(TuiLogLayer::new(log_buffer.clone()))
        .with(file_layer)
        .init();

    guard
}

fn file_writer(
    logging: &LoggingConfig,
) -> Option<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    if !logging.file_enabled {
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&logging.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            logging.file_dir, e
        );
        return None;
    }

    let dir = &logging.file_dir;
    let prefix = &logging.file_prefix;
    let file_appender = match logging.file_rotation {
        LogRotation::Hourly => tracing_appender::rolling::hourly(dir, prefix),
        LogRotation::Daily => tracing_appender::rolling::daily(dir, prefix),
        LogRotation::Never => tracing_appender::rolling::never(dir, prefix),
    };

    Some(tracing_appender::non_blocking(file_appender))
}
