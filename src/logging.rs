//! Tracing subscriber setup.

use crate::config::CaroConfig;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn env_filter(config: &CaroConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs to the configured file so output never lands on the game screen.
pub fn init_file_tracing(config: &CaroConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Logs to stderr, keeping stdout for command output.
pub fn init_stderr_tracing(config: &CaroConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}
