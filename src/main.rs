// EcoLearn - terminal client for the EcoLearn learning platform
//
// Wires the pieces together: configuration, logging, the API client,
// the AppEvent channel, and the TUI event loop. Demo mode
// (ECOLEARN_DEMO=1) swaps the API client for canned responders.

use anyhow::Result;
use ecolearn::anim::SystemClock;
use ecolearn::api::ApiClient;
use ecolearn::cli;
use ecolearn::config::Config;
use ecolearn::logging::{BufferLayer, LogBuffer};
use ecolearn::tui;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --path)
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Log capture for TUI mode: logs go to an in-memory buffer so they
    // don't garble the alternate screen. Headless mode logs to stdout.
    // Precedence: RUST_LOG env var > config file > default "info"
    let log_buffer = LogBuffer::new();
    let default_filter = format!("ecolearn={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // Optional rotating file log; the guard must stay alive so writes flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> = if config
        .logging
        .file_enabled
    {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::daily(
                    &config.logging.file_dir,
                    &config.logging.file_prefix,
                );
                let (non_blocking, guard) = tracing_appender::non_blocking(appender);
                if config.enable_tui {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(BufferLayer::new(log_buffer.clone()))
                        .with(
                            tracing_subscriber::fmt::layer()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();
                } else {
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(tracing_subscriber::fmt::layer())
                        .with(
                            tracing_subscriber::fmt::layer()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();
                }
                Some(guard)
            }
            Err(e) => {
                eprintln!(
                    "Warning: could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                init_without_file(&config, filter, &log_buffer);
                None
            }
        }
    } else {
        init_without_file(&config, filter, &log_buffer);
        None
    };

    // API client: absent in demo mode, required otherwise. A missing CSRF
    // token fails here, before any UI comes up.
    let api = if config.demo_mode {
        tracing::info!("Running in DEMO MODE - interactions resolve against canned responses");
        None
    } else {
        Some(Arc::new(ApiClient::new(
            config.api_url.clone(),
            config.csrf_token.clone(),
        )?))
    };

    // Event channel from network tasks (or demo responders) to the UI
    let (event_tx, event_rx) = mpsc::channel(64);

    if config.enable_tui {
        tracing::info!("Starting TUI");
        tui::run_tui(
            event_rx,
            log_buffer,
            config,
            api,
            event_tx,
            Arc::new(SystemClock),
        )
        .await?;
    } else {
        // Headless mode has no interactive surface; it exists so the
        // process can be kept alive for log inspection in development
        tracing::info!("TUI disabled; idling until Ctrl+C");
        tokio::signal::ctrl_c().await?;
    }

    tracing::info!("Shutdown complete");
    Ok(())
}

fn init_without_file(config: &Config, filter: EnvFilter, log_buffer: &LogBuffer) {
    if config.enable_tui {
        tracing_subscriber::registry()
            .with(filter)
            .with(BufferLayer::new(log_buffer.clone()))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
