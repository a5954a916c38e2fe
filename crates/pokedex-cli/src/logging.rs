//! Subscriber setup for both binaries.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::FmtSubscriber;
use tracing_subscriber::filter::LevelFilter;

use crate::args::LogLevel;

/// Console command: structured logs on stderr, next to user-facing errors.
pub fn init_stderr(level: LogLevel, ansi: bool) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(LevelFilter::from(level))
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Interactive viewer: the alternate screen owns the terminal, so logs go to
/// `path` when given and are dropped otherwise.
pub fn init_for_tui(level: LogLevel, path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(LevelFilter::from(level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
