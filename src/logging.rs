use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;

const LOG_PREFIX: &str = "flowguard";

/// Route tracing output to daily log files under `logs_dir`.
///
/// The terminal belongs to the TUI, so nothing goes to stdout. `RUST_LOG` wins over
/// `default_level`.
pub fn init(logs_dir: &Path, default_level: &str) -> Result<()> {
    fs::create_dir_all(logs_dir)
        .with_context(|| format!("Failed to create log directory: {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(5)
        .filename_prefix(LOG_PREFIX)
        .filename_suffix("log")
        .build(logs_dir)
        .context("Failed to set up log file")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("{}={}", env!("CARGO_PKG_NAME"), default_level)))
        .unwrap_or_else(|_| EnvFilter::new(format!("{}=info", env!("CARGO_PKG_NAME"))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .init();

    Ok(())
}
