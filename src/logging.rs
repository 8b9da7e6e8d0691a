// File-backed tracing setup (the terminal belongs to the TUI)

use crate::config::LoggingConfig;
use anyhow::{Context, Result, anyhow};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing::Level;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid log level '{0}' (expected trace, debug, info, warn or error)")]
pub struct InvalidLevel(pub String);

pub fn parse_level(level: &str) -> Result<Level, InvalidLevel> {
    level
        .trim()
        .parse::<Level>()
        .map_err(|_| InvalidLevel(level.to_string()))
}

/// Install a global subscriber appending to `path`. Returns `Ok(false)` when
/// logging is disabled.
pub fn init(config: &LoggingConfig, path: &Path) -> Result<bool> {
    if !config.enabled {
        return Ok(false);
    }

    let level = parse_level(&config.level)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(true)
}
